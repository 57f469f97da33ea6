use crate::config::LayoutSpec;

/// Square grid geometry for a batch of icons. Placement is row-major,
/// left-to-right and top-to-bottom; trailing cells of a non-square count
/// stay blank, the last row is not re-centered.
#[derive(Clone, Copy, Debug)]
pub struct GridLayout {
    pub grid_size: u32,
    pub cell_unit: u32,
    pub cell_gap: u32,
    pub padding: u32,
    pub canvas_size: u32,
}

impl GridLayout {
    /// Layout for `n` icons. `n` is the input count, including icons that
    /// are later dropped, so slots stay stable across reruns. Callers
    /// reject `n == 0` before getting here.
    pub fn new(n: usize, spec: &LayoutSpec) -> Self {
        let mut grid_size = (n as f64).sqrt().ceil().max(1.0) as u32;
        // guard against float rounding at perfect squares
        while (grid_size as usize) * (grid_size as usize) < n {
            grid_size += 1;
        }
        while grid_size > 1 && ((grid_size - 1) as usize) * ((grid_size - 1) as usize) >= n {
            grid_size -= 1;
        }
        let cell_unit = spec.cell_unit();
        let cell_gap = spec.cell_gap;
        let padding = spec.padding();
        let canvas_size = grid_size * cell_unit + (grid_size - 1) * cell_gap + 2 * padding;
        GridLayout {
            grid_size,
            cell_unit,
            cell_gap,
            padding,
            canvas_size,
        }
    }

    /// Top-left corner of slot `i`.
    pub fn origin(&self, i: usize) -> (f64, f64) {
        let col = (i as u32) % self.grid_size;
        let row = (i as u32) / self.grid_size;
        let pitch = self.cell_unit + self.cell_gap;
        (
            (self.padding + col * pitch) as f64,
            (self.padding + row * pitch) as f64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(cell: u32, gap: u32) -> LayoutSpec {
        LayoutSpec {
            cell_size: cell,
            cell_gap: gap,
            ..LayoutSpec::default()
        }
    }

    #[test]
    fn grid_size_is_ceil_sqrt() {
        let s = spec(512, 256);
        for n in 1..=100usize {
            let g = GridLayout::new(n, &s).grid_size as usize;
            assert!(g * g >= n, "n={n} g={g}");
            assert!((g - 1) * (g - 1) < n, "n={n} g={g}");
        }
    }

    #[test]
    fn canvas_formula_is_exact() {
        for (n, cell, gap) in [(1usize, 512u32, 256u32), (4, 512, 256), (9, 100, 0), (7, 64, 8)] {
            let layout = GridLayout::new(n, &spec(cell, gap));
            let g = layout.grid_size;
            assert_eq!(layout.canvas_size, g * cell + (g - 1) * gap + 2 * gap);
        }
    }

    #[test]
    fn four_icons_place_in_a_two_by_two_grid() {
        let layout = GridLayout::new(4, &spec(512, 256));
        assert_eq!(layout.grid_size, 2);
        assert_eq!(layout.canvas_size, 1792);
        assert_eq!(layout.origin(0), (256.0, 256.0));
        assert_eq!(layout.origin(1), (1024.0, 256.0));
        assert_eq!(layout.origin(2), (256.0, 1024.0));
        assert_eq!(layout.origin(3), (1024.0, 1024.0));
    }

    #[test]
    fn fifth_icon_lands_at_row_one_col_one() {
        let layout = GridLayout::new(5, &spec(512, 256));
        assert_eq!(layout.grid_size, 3);
        // index 4: row = 4 / 3 = 1, col = 4 % 3 = 1
        assert_eq!(layout.origin(4), (1024.0, 1024.0));
    }

    #[test]
    fn border_cell_sets_the_pitch() {
        let mut s = spec(512, 256);
        s.border = Some(crate::config::BorderSpec {
            cell_size: 640,
            color: crate::config::Rgba {
                r: 255,
                g: 255,
                b: 255,
                alpha: 1.0,
            },
        });
        let layout = GridLayout::new(4, &s);
        assert_eq!(layout.cell_unit, 640);
        assert_eq!(layout.canvas_size, 2 * 640 + 256 + 2 * 256);
        assert_eq!(layout.origin(3), (256.0 + 640.0 + 256.0, 256.0 + 640.0 + 256.0));
    }

    #[test]
    fn explicit_zero_padding() {
        let mut s = spec(100, 10);
        s.padding = Some(0);
        let layout = GridLayout::new(2, &s);
        assert_eq!(layout.canvas_size, 2 * 100 + 10);
        assert_eq!(layout.origin(0), (0.0, 0.0));
    }
}
