use crate::{Bitmap, Color, Position, Rectangle, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
enum DrawCommand {
    Clear(Color),
    SetPixel(Position, Color),
    FillRect(Rectangle, Color),
    Line(Position, Position, Color),
}

/// A drawing surface bound to a target bitmap.
///
/// Commands are queued and only materialized into the target's pixel storage
/// when the owning session flushes the surface. Output is clipped to the
/// target extent; a command entirely outside the bitmap draws nothing.
pub struct DrawSurface {
    size: Size,
    pending: Vec<DrawCommand>,
}

impl DrawSurface {
    pub(crate) fn new(size: Size) -> Self {
        Self { size, pending: Vec::new() }
    }

    pub fn get_size(&self) -> Size {
        self.size
    }

    /// Fill the whole target with one color.
    pub fn clear(&mut self, color: Color) {
        // a clear overdraws everything queued before it
        self.pending.clear();
        self.pending.push(DrawCommand::Clear(color));
    }

    pub fn set_pixel(&mut self, pos: impl Into<Position>, color: Color) {
        self.pending.push(DrawCommand::SetPixel(pos.into(), color));
    }

    pub fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        self.pending.push(DrawCommand::FillRect(rect, color));
    }

    pub fn draw_line(&mut self, from: impl Into<Position>, to: impl Into<Position>, color: Color) {
        self.pending.push(DrawCommand::Line(from.into(), to.into(), color));
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Materialize all pending commands into the target bitmap.
    pub(crate) fn flush_into(&mut self, bitmap: &mut Bitmap) {
        for command in self.pending.drain(..) {
            match command {
                DrawCommand::Clear(color) => {
                    let word = color.to_argb();
                    bitmap.words_mut().fill(word);
                }
                DrawCommand::SetPixel(pos, color) => bitmap.plot(pos.x, pos.y, color),
                DrawCommand::FillRect(rect, color) => fill_rect(bitmap, rect, color),
                DrawCommand::Line(from, to, color) => draw_line(bitmap, from, to, color),
            }
        }
    }
}

impl std::fmt::Debug for DrawSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawSurface")
            .field("size", &self.size)
            .field("pending", &self.pending.len())
            .finish()
    }
}

fn fill_rect(bitmap: &mut Bitmap, rect: Rectangle, color: Color) {
    if rect.is_empty() {
        return;
    }
    let left = rect.left().max(0);
    let top = rect.top().max(0);
    let right = rect.right().min(bitmap.get_width());
    let bottom = rect.bottom().min(bitmap.get_height());

    for y in top..bottom {
        for x in left..right {
            bitmap.plot(x, y, color);
        }
    }
}

fn draw_line(bitmap: &mut Bitmap, from: Position, to: Position, color: Color) {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = from.x;
    let mut y = from.y;
    loop {
        bitmap.plot(x, y, color);
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
