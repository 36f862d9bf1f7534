//! Layout Demo: nested panes with keyboard focus.
//!
//! Demonstrates:
//! - Static header plus weighted panes
//! - A nested vertical container (enter to step in, esc to step out)
//! - List, Table and TextEditor widgets
//!
//! Tab / Shift+Tab move focus, Ctrl+C quits. Set `PANESTACK_LOG=debug` to
//! write focus and layout logs to `panestack-demo.log`.

use panestack::style::Padding;
use panestack::{
    BorderKind, Container, Decoration, Direction, List, Node, Program, Rgb, Root, Style, Table, TextEditor, TextView,
};
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn init_logging() -> std::io::Result<()> {
    let Ok(filter) = EnvFilter::try_from_env("PANESTACK_LOG") else {
        return Ok(());
    };
    let file = File::create("panestack-demo.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn build_root() -> Root {
    let pane = Decoration::bordered(BorderKind::Rounded).padding(Padding::symmetric(0, 1));

    let tasks = List::new(["Write parser", "Review layout", "Fix focus bug", "Ship release"])
        .with_title("Tasks")
        .with_help(true);

    let mut table = Table::new(["Name", "Role", "Team"], false).with_add_rows(true);
    table.add_row(&["Ada", "Engineer", "Core"], &[true, false, true]);
    table.add_row(&["Grace", "Admiral", "Navy"], &[]);
    table.add_row(&["Linus", "Maintainer", "Kernel"], &[]);

    let nested = Container::vertical()
        .with_weighted(
            List::new(["alpha", "beta", "gamma"]).with_max_selections(1),
            1.0,
            pane,
            1,
        )
        .with_weighted(TextView::new("Nested pane\nenter: step in\nesc: step out"), 1.0, pane, 0);

    let notes = TextEditor::new().with_line_numbers(true).with_placeholder("Press enter to write notes...");

    let main = Container::horizontal()
        .with_weighted(tasks, 1.0, pane, 1)
        .with_weighted(table, 2.0, pane, 1)
        .with_weighted(nested, 1.0, Decoration::bordered(BorderKind::Double), 1)
        .with_weighted(notes, 1.5, pane, 0);

    let mut root = Root::new(Direction::Vertical);
    let header = TextView::new(" panestack demo | tab/shift+tab: focus | ctrl+c: quit")
        .with_style(Style::new().fg(Rgb::BLACK).bg(Rgb::ACCENT).bold());
    root.add_static(header, 1, Decoration::new(), 0);
    root.add_weighted(main, 1.0, Decoration::new(), 0);
    root
}

fn main() -> panestack::Result<()> {
    init_logging()?;

    let mut program = Program::new(build_root());
    program.run()?;

    let tasks = program
        .root()
        .container()
        .child(1)
        .and_then(|main| main.model().as_container())
        .and_then(|main| main.child(0))
        .map(|entry| entry.model());
    if let Some(Node::List(list)) = tasks {
        println!("Selected tasks: {:?}", list.selected_values());
    }
    Ok(())
}
