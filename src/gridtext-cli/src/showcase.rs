//! Built-in showcase tables.

use gridtext_core::{Alignment, Content, ImageContent, Table};
use serde::{Deserialize, Serialize};

/// A named, built-in table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// A single text cell
    Greeting,
    /// A single empty cell (zero-width column, zero-height row)
    Blank,
    /// Left/right aligned text next to a centered ASCII image
    Mixed,
    /// A table embedded as a frozen snapshot inside another
    Nested,
    /// A table that contains a snapshot of itself
    SelfEmbedded,
}

impl Scenario {
    /// Every scenario in presentation order.
    pub const ALL: [Scenario; 5] = [
        Scenario::Greeting,
        Scenario::Blank,
        Scenario::Mixed,
        Scenario::Nested,
        Scenario::SelfEmbedded,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Greeting => "greeting",
            Scenario::Blank => "blank",
            Scenario::Mixed => "mixed",
            Scenario::Nested => "nested",
            Scenario::SelfEmbedded => "self_embedded",
        }
    }

    /// Build the table for this scenario.
    pub fn build(&self) -> gridtext_core::Result<Table> {
        match self {
            Scenario::Greeting => {
                let mut table = Table::new(1, 1);
                table.set_cell(0, 0, &Content::text("Hi", Alignment::Left))?;
                Ok(table)
            }
            Scenario::Blank => Ok(Table::new(1, 1)),
            Scenario::Mixed => mixed(),
            Scenario::Nested => nested(),
            Scenario::SelfEmbedded => {
                let mut table = nested()?;
                table.embed_self(0, 0)?;
                Ok(table)
            }
        }
    }
}

fn logo() -> ImageContent {
    ImageContent::new()
        .with_row("###                   ")
        .with_row("#  #                  ")
        .with_row("#  # # ##   ###    ###")
        .with_row("###  ##    #   #  #  #")
        .with_row("#    #     #   #  #  #")
        .with_row("#    #     #   #  #  #")
        .with_row("#    #      ###    ###")
        .with_row("                     #")
        .with_row("                   ## ")
}

fn mixed() -> gridtext_core::Result<Table> {
    let mut table = Table::new(3, 2);
    table.set_cell(0, 0, &Content::text("Hello,\nHello Kitty", Alignment::Left))?;
    table.set_cell(1, 0, &Content::text("Lorem ipsum dolor sit amet", Alignment::Left))?;
    table.set_cell(2, 0, &Content::text("Bye,\nHello Kitty", Alignment::Right))?;
    table.set_cell(1, 1, &logo().into())?;
    table.copy_cell((1, 1), (0, 1))?;
    Ok(table)
}

fn concepts() -> gridtext_core::Result<Table> {
    let mut table = Table::new(2, 2);
    for (row, col, text) in [
        (0, 0, "OOP"),
        (0, 1, "Encapsulation"),
        (1, 0, "Polymorphism"),
        (1, 1, "Inheritance"),
    ] {
        table.set_cell(row, col, &Content::text(text, Alignment::Left))?;
    }
    Ok(table)
}

fn nested() -> gridtext_core::Result<Table> {
    let mut inner = concepts()?;
    let mut outer = Table::new(2, 2);
    outer.set_table(0, 0, &inner)?;
    outer.set_cell(0, 1, &logo().into())?;
    outer.set_cell(1, 1, &Content::text("frozen\nsnapshot", Alignment::Right))?;

    // Only the source changes; the embedded snapshot keeps "OOP".
    inner
        .get_cell_mut(0, 0)?
        .as_text_mut()?
        .set_text("Object Oriented Programming");
    outer.set_table(1, 0, &inner)?;
    Ok(outer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtext_core::CellContent;

    #[test]
    fn test_all_scenarios_build() {
        for scenario in Scenario::ALL {
            let table = scenario.build().unwrap();
            assert!(!table.render().is_empty(), "{} rendered nothing", scenario.name());
        }
    }

    #[test]
    fn test_greeting_and_blank() {
        assert_eq!(
            Scenario::Greeting.build().unwrap().render(),
            "+--+\n|Hi|\n+--+\n"
        );
        assert_eq!(Scenario::Blank.build().unwrap().render(), "++\n++\n");
    }

    #[test]
    fn test_nested_keeps_old_snapshot() {
        let table = Scenario::Nested.build().unwrap();
        let first = table.get_cell(0, 0).unwrap().as_table().unwrap();
        let second = table.get_cell(1, 0).unwrap().as_table().unwrap();
        assert_ne!(first, second);
        assert!(first.lines()[1].contains("OOP "));
        assert!(second.lines()[1].contains("Object Oriented Programming"));
    }

    #[test]
    fn test_self_embedded_nests_previous_state() {
        let before = Scenario::Nested.build().unwrap();
        let table = Scenario::SelfEmbedded.build().unwrap();
        let snapshot = table.get_cell(0, 0).unwrap().as_table().unwrap();
        assert_eq!(snapshot.table(), &before);
        assert_eq!(snapshot.width(), before.layout().total_width());
    }
}
