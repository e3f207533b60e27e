//! Column sort state and the per-column comparison values.

use std::cmp::Ordering;

use crate::user::UserRecord;

/// Sortable columns of the users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    FullName,
    Age,
    Gender,
    Phone,
    Address,
}

impl SortKey {
    /// Columns in table order.
    pub const ALL: [Self; 5] = [
        Self::FullName,
        Self::Age,
        Self::Gender,
        Self::Phone,
        Self::Address,
    ];

    /// Comparison value of `user` for this column.
    ///
    /// Full name and address compare on space-joined strings, which differs from the
    /// comma-separated address shown in the table.
    pub fn value_of(self, user: &UserRecord) -> SortValue {
        match self {
            Self::FullName => SortValue::Text(user.full_name()),
            Self::Age => SortValue::Number(user.age),
            Self::Gender => SortValue::Text(user.gender.clone()),
            Self::Phone => SortValue::Text(user.phone.clone()),
            Self::Address => {
                SortValue::Text(format!("{} {}", user.address.city, user.address.address))
            }
        }
    }
}

/// Derived comparison value. Text compares by code point, never locale-aware.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Number(u32),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header glyph for an active column.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Active sort column and direction.
///
/// `direction` is `None` exactly when `key` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    key: Option<SortKey>,
    direction: SortDirection,
}

impl SortState {
    pub fn key(&self) -> Option<SortKey> {
        self.key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn is_active(&self) -> bool {
        self.key.is_some()
    }

    /// Direction shown on `key`'s header, `None` for every other column.
    pub fn direction_for(&self, key: SortKey) -> SortDirection {
        if self.key == Some(key) {
            self.direction
        } else {
            SortDirection::None
        }
    }

    /// Advances the three-phase cycle for `key`.
    ///
    /// Ascending, then descending, then inactive. A different key starts over at
    /// ascending.
    pub fn toggle(self, key: SortKey) -> Self {
        let direction = match (self.key == Some(key), self.direction) {
            (true, SortDirection::Ascending) => SortDirection::Descending,
            (true, SortDirection::Descending) => SortDirection::None,
            _ => SortDirection::Ascending,
        };

        match direction {
            SortDirection::None => Self::default(),
            direction => Self {
                key: Some(key),
                direction,
            },
        }
    }

    /// Orders `a` against `b` for this state. Inactive states report every pair equal.
    pub fn compare(&self, a: &UserRecord, b: &UserRecord) -> Ordering {
        let Some(key) = self.key else {
            return Ordering::Equal;
        };
        let ordering = key.value_of(a).cmp(&key.value_of(b));
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
            SortDirection::None => Ordering::Equal,
        }
    }
}
