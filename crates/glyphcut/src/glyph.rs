/// Characters whose ink sits far from the nominal line box. These get a
/// hand-tuned vertical offset instead of bounding box centering.
pub const NO_CENTER_CHARS: [char; 5] = ['"', '.', '_', '^', ','];

/// Glyph bounding box in pixels, relative to the text origin
/// (left edge of the pen position, ascender line).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Centered on both axes.
    #[default]
    Centered,
    /// Centered horizontally, vertical offset taken from the no-center table.
    Biased,
}

impl Alignment {
    pub fn is_centered(self) -> bool {
        self == Alignment::Centered
    }
}

/// Text origin for drawing a glyph into a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub alignment: Alignment,
}

pub fn is_centered(ch: char) -> bool {
    !NO_CENTER_CHARS.contains(&ch)
}

/// Compute where to put the text origin so the glyph lands inside a
/// `canvas_width` x `canvas_height` cell.
///
/// Horizontal placement always centers the ink. Vertical placement centers
/// too, except for [`NO_CENTER_CHARS`]:
///
/// * `_` sits 5px above the bottom edge
/// * `,` sits 6px above the bottom edge
/// * `.` and `"` are pinned 1px below the top edge
/// * any other member has its ink top aligned with the top edge
///
/// Halving uses floor division, so odd remainders round towards the
/// top-left and negative remainders round away from zero.
pub fn place(ch: char, bbox: &BoundingBox, canvas_width: u32, canvas_height: u32) -> Placement {
    let canvas_width = canvas_width as i32;
    let canvas_height = canvas_height as i32;

    let x = (canvas_width - bbox.width()).div_euclid(2) - bbox.left;
    if is_centered(ch) {
        let y = (canvas_height - bbox.height()).div_euclid(2) - bbox.top;
        return Placement {
            x,
            y,
            alignment: Alignment::Centered,
        };
    }

    let y = match ch {
        '_' => canvas_height - 5 - bbox.top,
        ',' => canvas_height - 6 - bbox.top,
        '.' | '"' => 1 - bbox.top,
        _ => -bbox.top,
    };
    Placement {
        x,
        y,
        alignment: Alignment::Biased,
    }
}
