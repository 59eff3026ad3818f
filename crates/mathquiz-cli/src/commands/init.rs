//! The `mathquiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new("mathquiz.toml");
    if path.exists() {
        println!("mathquiz.toml already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG)?;
        println!("Created mathquiz.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit mathquiz.toml to pick a default level");
    println!("  2. Run: mathquiz levels");
    println!("  3. Run: mathquiz play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# mathquiz configuration

# Draws per new equation before a level counts as used up.
max_regenerations = 1000

# Uncomment to skip the level prompt.
# default_level = 1

level_failed_responses = [
    "I said, choose a number between 1 and 5!",
    "Come on, its a simple task, pick a number between 1 and 5",
    "I've got things to do here, 1-5, now!",
    "Whats your problem?  pick 1,2,3,4, or 5",
]
"#;
