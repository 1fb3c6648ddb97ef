use std::io::{self, Write};

use tabled::{settings::Style, Table, Tabled};

use crate::error::Result;
use crate::types::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    token: &'static str,
    #[tabled(rename = "Organization")]
    organization: &'static str,
}

impl From<&Category> for CategoryRow {
    fn from(category: &Category) -> Self {
        Self {
            token: category.token(),
            organization: category.organization(),
        }
    }
}

fn write_categories<W: Write>(mut writer: W) -> Result<()> {
    let rows: Vec<CategoryRow> = Category::ALL.iter().map(CategoryRow::from).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    writeln!(writer, "{table}")?;
    writer.flush()?;
    Ok(())
}

pub fn list() -> Result<()> {
    write_categories(io::stdout().lock())
}
