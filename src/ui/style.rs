/// Fixed grid geometry: tiles per row and label width in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTokens {
    pub grid_columns: usize,
    pub tile_label_width: usize,
}

pub const LAYOUT_TOKENS: StyleTokens = StyleTokens {
    grid_columns: 6,
    tile_label_width: 14,
};
