use super::CellContent;
use crate::lines::blank;

/// Blank placeholder. Has no natural size and renders as spaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EmptyContent;

impl CellContent for EmptyContent {
    fn width(&self) -> usize {
        0
    }

    fn height(&self) -> usize {
        0
    }

    fn render(&self, height: usize, width: usize) -> Vec<String> {
        vec![blank(width); height]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_renders_blank_box() {
        assert_eq!(EmptyContent.render(2, 3), vec!["   ", "   "]);
        assert!(EmptyContent.render(0, 5).is_empty());
        assert_eq!(EmptyContent.render(1, 0), vec![""]);
    }
}
