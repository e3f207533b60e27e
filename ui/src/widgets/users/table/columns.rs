//! Column definitions for the users table.

use egui_extras::Column;
use roster_business::{ColumnResizer, SortKey};

pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 28.0;
/// Grab area at the trailing edge of each header cell.
pub const RESIZE_HANDLE_WIDTH: f32 = 8.0;

pub struct UserColumn {
    pub key: SortKey,
    pub title: &'static str,
    pub default_width: f32,
}

/// Table columns, left to right.
pub const COLUMNS: [UserColumn; 5] = [
    UserColumn {
        key: SortKey::FullName,
        title: "Full name",
        default_width: 220.0,
    },
    UserColumn {
        key: SortKey::Age,
        title: "Age",
        default_width: 80.0,
    },
    UserColumn {
        key: SortKey::Gender,
        title: "Gender",
        default_width: 100.0,
    },
    UserColumn {
        key: SortKey::Phone,
        title: "Phone",
        default_width: 170.0,
    },
    UserColumn {
        key: SortKey::Address,
        title: "Address",
        default_width: 300.0,
    },
];

/// Width `index` renders at: the dragged width, or the column default.
#[inline]
pub fn effective_width(resizer: &ColumnResizer, index: usize) -> f32 {
    resizer
        .width(index)
        .unwrap_or(COLUMNS[index].default_width)
}

#[inline]
pub fn table_columns(resizer: &ColumnResizer) -> Vec<Column> {
    (0..COLUMNS.len())
        .map(|index| Column::exact(effective_width(resizer, index)))
        .collect()
}
