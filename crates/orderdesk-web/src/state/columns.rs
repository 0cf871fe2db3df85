//! Which table columns are shown

use indexmap::IndexMap;
use std::fmt;

/// A toggleable column of the orders table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Order number
    OrderNumber,
    /// Due date
    DueDate,
    /// Status badge
    Status,
    /// Gross total
    TotalGross,
    /// Customer name
    Customer,
}

impl Column {
    /// Columns in display order
    pub const ALL: [Self; 5] = [
        Self::OrderNumber,
        Self::DueDate,
        Self::Status,
        Self::TotalGross,
        Self::Customer,
    ];

    /// Wire key of the column
    pub const fn key(self) -> &'static str {
        match self {
            Self::OrderNumber => "orderNumber",
            Self::DueDate => "dueDate",
            Self::Status => "status",
            Self::TotalGross => "totalGross",
            Self::Customer => "customer",
        }
    }

    /// Header label
    pub const fn label(self) -> &'static str {
        match self {
            Self::OrderNumber => "Numer zamówienia",
            Self::DueDate => "Data",
            Self::Status => "Status",
            Self::TotalGross => "Kwota",
            Self::Customer => "Klient",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Visibility and label of one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSetting {
    /// Whether the column is shown
    pub visible: bool,
    /// Header label
    pub label: &'static str,
}

/// Ordered column visibility map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnVisibility {
    columns: IndexMap<Column, ColumnSetting>,
}

impl Default for ColumnVisibility {
    fn default() -> Self {
        let columns = Column::ALL
            .into_iter()
            .map(|column| {
                (
                    column,
                    ColumnSetting {
                        visible: true,
                        label: column.label(),
                    },
                )
            })
            .collect();
        Self { columns }
    }
}

impl ColumnVisibility {
    /// Flip visibility of `column`
    pub fn toggle(&mut self, column: Column) {
        if let Some(setting) = self.columns.get_mut(&column) {
            setting.visible = !setting.visible;
        }
    }

    /// Whether `column` is shown
    pub fn is_visible(&self, column: Column) -> bool {
        self.columns
            .get(&column)
            .is_some_and(|setting| setting.visible)
    }

    /// All columns with their settings, in display order
    pub fn iter(&self) -> impl Iterator<Item = (Column, ColumnSetting)> + '_ {
        self.columns.iter().map(|(column, setting)| (*column, *setting))
    }

    /// Shown columns, in display order
    pub fn visible(&self) -> Vec<Column> {
        self.iter()
            .filter(|(_, setting)| setting.visible)
            .map(|(column, _)| column)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_order_and_labels() {
        let columns = ColumnVisibility::default();
        let labels: Vec<_> = columns.iter().map(|(_, setting)| setting.label).collect();

        assert_eq!(
            labels,
            vec!["Numer zamówienia", "Data", "Status", "Kwota", "Klient"]
        );
        assert_eq!(columns.visible(), Column::ALL.to_vec());
    }

    #[test]
    fn test_toggle_keeps_label_and_order() {
        let mut columns = ColumnVisibility::default();
        columns.toggle(Column::Status);

        assert!(!columns.is_visible(Column::Status));
        assert_eq!(
            columns.visible(),
            vec![
                Column::OrderNumber,
                Column::DueDate,
                Column::TotalGross,
                Column::Customer
            ]
        );

        columns.toggle(Column::Status);
        assert_eq!(columns, ColumnVisibility::default());
    }
}
