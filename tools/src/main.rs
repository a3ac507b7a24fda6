extern crate calcbrain;
mod display;
mod plot;
mod repl;
#[cfg(test)]
mod tests;

use repl::{ReplErr, Session};

fn main() -> Result<(), ReplErr> {
    env_logger::builder().format_timestamp(None).init();

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        match Session::new().evaluate_once(&input) {
            Err(e) => println!("Error: {}", e),
            Ok(result) => println!("{}", result),
        }
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let histpath = home::home_dir().map(|h| h.join(".rpncalc_history"));
    let mut rl = rustyline::DefaultEditor::new()?;
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    let mut session = Session::new();
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                match session.execute(&line) {
                    Err(e) => println!("Error: {}", e),
                    Ok(output) => output.iter().for_each(|out| println!("{}", out)),
                }
                println!("{}", session.history_label());
                println!("{}", session.display());
            }
        }
    }
    if let Some(ref path) = histpath {
        if let Err(e) = rl.save_history(path) {
            log::warn!("couldn't save history to {}: {}", path.display(), e);
        }
    }
    Ok(())
}
