//! End-to-end rendering tests for mixed, copied and nested tables.
//!
//! Each step mutates the tables in sequence and checks the full rendered
//! output against a fixture, so the assertions double as regression tests
//! for copy independence and snapshot freezing.

use gridtext_core::{Alignment, CellContent, Content, ImageContent, Table};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}.txt", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("missing fixture {path}: {e}"))
}

fn left(text: &str) -> Content {
    Content::text(text, Alignment::Left)
}

fn progtest_logo() -> Content {
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
        .with_row("                      ")
        .with_row(" #    ###   ###   #   ")
        .with_row("###  #   # #     ###  ")
        .with_row(" #   #####  ###   #   ")
        .with_row(" #   #         #  #   ")
        .with_row("  ##  ###   ###    ## ")
        .into()
}

fn bug_banner() -> Content {
    Content::image([
        "*****   *      *  *      ******* ******  *",
        "*    *  *      *  *      *            *  *",
        "*    *  *      *  *      *           *   *",
        "*    *  *      *  *      *****      *    *",
        "****    *      *  *      *         *     *",
        "*  *    *      *  *      *        *       ",
        "*   *   *      *  *      *       *       *",
        "*    *    *****   ****** ******* ******  *",
    ])
}

fn plus_plus() -> Content {
    Content::image([
        "  ********                    ",
        " **********                   ",
        "**        **                  ",
        "**             **        **   ",
        "**             **        **   ",
        "***         ********  ********",
        "****        ********  ********",
        "****           **        **   ",
        "****           **        **   ",
        "****      **                  ",
        " **********                   ",
        "  ********                    ",
    ])
}

const LOREM: &str = "Lorem ipsum dolor sit amet,\n\
consectetur adipiscing\n\
elit. Curabitur scelerisque\n\
lorem vitae lectus cursus,\n\
vitae porta ante placerat. Class aptent taciti\n\
sociosqu ad litora\n\
torquent per\n\
conubia nostra,\n\
per inceptos himenaeos.\n\
\n\
Donec tincidunt augue\n\
sit amet metus\n\
pretium volutpat.\n\
Donec faucibus,\n\
ante sit amet\n\
luctus posuere,\n\
mauris tellus";

fn initial_table() -> Table {
    let mut t0 = Table::new(3, 2);
    t0.set_cell(0, 0, &left("Hello,\nHello Kitty")).unwrap();
    t0.set_cell(1, 0, &left("Lorem ipsum dolor sit amet")).unwrap();
    t0.set_cell(2, 0, &Content::text("Bye,\nHello Kitty", Alignment::Right))
        .unwrap();
    t0.set_cell(1, 1, &progtest_logo()).unwrap();
    t0.set_cell(2, 1, &Content::empty()).unwrap();
    t0
}

fn edited_table() -> Table {
    let mut t0 = initial_table();
    t0.copy_cell((1, 1), (0, 1)).unwrap();
    t0.set_cell(2, 1, &bug_banner()).unwrap();
    t0.get_cell_mut(1, 0)
        .unwrap()
        .as_text_mut()
        .unwrap()
        .set_text(LOREM);
    t0
}

fn concepts_table() -> Table {
    let mut t2 = Table::new(2, 2);
    t2.set_cell(0, 0, &left("OOP")).unwrap();
    t2.set_cell(0, 1, &left("Encapsulation")).unwrap();
    t2.set_cell(1, 0, &left("Polymorphism")).unwrap();
    t2.set_cell(1, 1, &left("Inheritance")).unwrap();
    t2
}

#[test]
fn test_mixed_text_and_image() {
    assert_eq!(initial_table().render(), fixture("initial"));
}

#[test]
fn test_cell_copy_and_text_edit() {
    assert_eq!(edited_table().render(), fixture("edited"));
}

#[test]
fn test_table_copy_is_independent() {
    let t0 = edited_table();
    let mut t1 = t0.clone();
    t1.set_cell(1, 0, &Content::empty()).unwrap();
    t1.set_cell(1, 1, &Content::empty()).unwrap();

    assert_eq!(t0.render(), fixture("edited_after_copy"));
    assert_eq!(t1.render(), fixture("copy_with_cleared_row"));
}

#[test]
fn test_assignment_replaces_previous_grid() {
    let t0 = edited_table();
    let mut t1 = t0.clone();
    t1.set_cell(1, 0, &Content::empty()).unwrap();

    t1 = t0.clone();
    t1.set_cell(0, 0, &Content::empty()).unwrap();
    t1.set_cell(1, 1, &plus_plus()).unwrap();

    assert_eq!(t0.render(), fixture("edited_after_assign"));
    assert_eq!(t1.render(), fixture("assigned_with_image"));
}

#[test]
fn test_embedded_table_is_frozen() {
    let t0 = edited_table();
    let mut t1 = t0.clone();
    t1.set_cell(0, 0, &Content::empty()).unwrap();
    t1.set_cell(1, 1, &plus_plus()).unwrap();

    let mut t2 = concepts_table();
    assert_eq!(t2.render(), fixture("concepts"));

    t1.set_table(0, 0, &t2).unwrap();
    t2.get_cell_mut(0, 0)
        .unwrap()
        .as_text_mut()
        .unwrap()
        .set_text("Object Oriented Programming");

    assert_eq!(t2.render(), fixture("concepts_renamed"));
    assert_eq!(t1.render(), fixture("with_frozen_concepts"));

    assert_ne!(t0, t1);
    assert_eq!(t0.get_cell(1, 1).unwrap(), t0.get_cell(0, 1).unwrap());
    assert_ne!(t0.get_cell(0, 0).unwrap(), t0.get_cell(0, 1).unwrap());
}

#[test]
fn test_repeated_self_embedding() {
    let mut t1 = edited_table();
    t1.set_cell(0, 0, &Content::empty()).unwrap();
    t1.set_cell(1, 1, &plus_plus()).unwrap();
    t1.set_table(0, 0, &concepts_table()).unwrap();

    t1.embed_self(0, 0).unwrap();
    assert_eq!(t1.render(), fixture("self_embedded_once"));

    t1.embed_self(0, 0).unwrap();
    assert_eq!(t1.render(), fixture("self_embedded_twice"));
}

#[test]
fn test_image_equality_is_by_content() {
    let mut table = Table::new(1, 2);
    table.set_cell(0, 0, &progtest_logo()).unwrap();
    table.set_cell(0, 1, &progtest_logo()).unwrap();
    assert_eq!(table.get_cell(0, 0).unwrap(), table.get_cell(0, 1).unwrap());

    table
        .get_cell_mut(0, 1)
        .unwrap()
        .as_image_mut()
        .unwrap()
        .push_row("extra pixel row       ");
    assert_ne!(table.get_cell(0, 0).unwrap(), table.get_cell(0, 1).unwrap());
}

#[test]
fn test_nested_cell_size_tracks_rendered_snapshot() {
    let concepts = concepts_table();
    let cell = Content::table(&concepts);
    let rendered = concepts.render();
    let widest = rendered.lines().map(str::len).max().unwrap();

    assert_eq!(cell.width(), widest);
    assert_eq!(cell.height(), rendered.lines().count());
}
