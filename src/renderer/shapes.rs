//! 2D primitives and a cell raster for low-resolution surfaces
//!
//! Screen space is the 800x600 play field in pixels. A [`Raster`] divides it
//! into fixed-size cells and fills whole cells, which is what character-cell
//! adapters need.

use glam::IVec2;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Exclusive bottom-right corner
    pub fn max(&self) -> IVec2 {
        IVec2::new(self.x + self.width, self.y + self.height)
    }
}

/// Fixed grid of colored cells covering the play field
#[derive(Debug, Clone)]
pub struct Raster {
    /// Pixels per cell
    cell: IVec2,
    /// Cells per axis
    size: IVec2,
    cells: Vec<Rgba>,
}

impl Raster {
    /// Grid covering `field` pixels with `cell`-sized cells (partial cells round up)
    pub fn new(field: IVec2, cell: IVec2) -> Self {
        let cell = cell.max(IVec2::ONE);
        let size = IVec2::new(
            (field.x + cell.x - 1) / cell.x,
            (field.y + cell.y - 1) / cell.y,
        );
        Self {
            cell,
            size,
            cells: vec![Rgba::default(); (size.x * size.y) as usize],
        }
    }

    /// Grid dimensions in cells
    pub fn size(&self) -> IVec2 {
        self.size
    }

    pub fn get(&self, col: i32, row: i32) -> Option<Rgba> {
        if col < 0 || row < 0 || col >= self.size.x || row >= self.size.y {
            return None;
        }
        Some(self.cells[(row * self.size.x + col) as usize])
    }

    pub fn clear(&mut self, color: Rgba) {
        self.cells.fill(color);
    }

    /// Fill every cell the rectangle touches
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        if rect.is_empty() {
            return;
        }
        let max = rect.max() - IVec2::ONE;
        let lo = self.cell_of(IVec2::new(rect.x, rect.y)).max(IVec2::ZERO);
        let hi = self.cell_of(max).min(self.size - IVec2::ONE);

        for row in lo.y..=hi.y {
            for col in lo.x..=hi.x {
                self.set(col, row, color);
            }
        }
    }

    /// Fill every cell whose center lies inside the circle, plus the cell
    /// holding the center so small circles never vanish
    pub fn fill_circle(&mut self, center: IVec2, radius: i32, color: Rgba) {
        if radius < 0 {
            return;
        }
        let lo = self.cell_of(center - IVec2::splat(radius)).max(IVec2::ZERO);
        let hi = self
            .cell_of(center + IVec2::splat(radius))
            .min(self.size - IVec2::ONE);

        for row in lo.y..=hi.y {
            for col in lo.x..=hi.x {
                let cell_center = IVec2::new(col, row) * self.cell + self.cell / 2;
                if (cell_center - center).length_squared() <= radius * radius {
                    self.set(col, row, color);
                }
            }
        }

        let home = self.cell_of(center);
        self.set(home.x, home.y, color);
    }

    /// Cell containing a pixel (may lie outside the grid)
    fn cell_of(&self, pixel: IVec2) -> IVec2 {
        IVec2::new(
            pixel.x.div_euclid(self.cell.x),
            pixel.y.div_euclid(self.cell.y),
        )
    }

    fn set(&mut self, col: i32, row: i32, color: Rgba) {
        if col < 0 || row < 0 || col >= self.size.x || row >= self.size.y {
            return;
        }
        self.cells[(row * self.size.x + col) as usize] = color;
    }
}
