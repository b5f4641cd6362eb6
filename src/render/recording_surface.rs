use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, RectPrimitive};

/// Drawing command captured by `RecordingSurface`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceCommand {
    Save,
    Restore,
    BeginPath,
    FillRect(RectPrimitive),
}

/// Headless surface used by tests and hosts without a raster backend.
///
/// It still validates rectangles and save/restore pairing so callers catch
/// invalid geometry and leaked state before a real backend is involved.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    depth: usize,
    fail_fills: bool,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `fill_rect` fail with a backend error.
    #[must_use]
    pub fn with_failing_fills(mut self) -> Self {
        self.fail_fills = true;
        self
    }

    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Filled rectangles in paint order.
    #[must_use]
    pub fn filled_rects(&self) -> Vec<RectPrimitive> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                SurfaceCommand::FillRect(rect) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Number of `save` calls not matched by a `restore` yet.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.depth
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawingSurface for RecordingSurface {
    fn save(&mut self) -> ChartResult<()> {
        self.depth += 1;
        self.commands.push(SurfaceCommand::Save);
        Ok(())
    }

    fn restore(&mut self) -> ChartResult<()> {
        if self.depth == 0 {
            return Err(ChartError::Backend(
                "restore called without matching save".to_owned(),
            ));
        }
        self.depth -= 1;
        self.commands.push(SurfaceCommand::Restore);
        Ok(())
    }

    fn begin_path(&mut self) {
        self.commands.push(SurfaceCommand::BeginPath);
    }

    fn fill_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        rect.validate()?;
        if self.fail_fills {
            return Err(ChartError::Backend("fill rejected by surface".to_owned()));
        }
        self.commands.push(SurfaceCommand::FillRect(*rect));
        Ok(())
    }
}
