//! Replays a fixed insert/delete sequence and prints the tree level by level
//! after every step. Rejected duplicates show up as warnings on stderr.

use log::{LevelFilter, info};
use rb_index::RbTree;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

const VALUES: [i32; 8] = [10, 5, 20, 1, 2, 7, 15, 30];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let mut tree = RbTree::with_capacity(VALUES.len());
    for value in VALUES {
        tree.insert(value);
    }
    // duplicate, logged and ignored
    tree.insert(VALUES[0]);

    println!("{tree}");

    for value in VALUES {
        tree.remove(value);
        let height = tree.verify()?;
        info!("removed {value}, {} keys left, black height {height}", tree.len());
        println!("after delete value {value}:\n{tree}");
    }

    Ok(())
}
