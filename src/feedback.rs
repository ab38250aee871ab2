use std::io::{self, BufRead, Write};

/// Modal prompt / notification capability. Presentation (icons, buttons,
/// layout) belongs to the implementor.
pub trait UserFeedback {
    fn confirm(&self, title: &str, body: &str) -> bool;
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}

/// Terminal implementation: prompts on stdout, reads the answer from stdin.
pub struct ConsoleFeedback;

impl ConsoleFeedback {
    fn read_answer() -> String {
        let mut answer = String::new();

        if io::stdin().lock().read_line(&mut answer).is_err() {
            return String::new();
        }

        answer.trim().to_lowercase()
    }
}

impl UserFeedback for ConsoleFeedback {
    fn confirm(&self, title: &str, body: &str) -> bool {
        print!("{}\n{} [s/N]: ", title, body);

        if io::stdout().flush().is_err() {
            return false;
        }

        matches!(Self::read_answer().as_str(), "s" | "si" | "sí")
    }

    fn notify_success(&self, message: &str) {
        println!("{}", message);
    }

    fn notify_error(&self, message: &str) {
        eprintln!("{}", message);
    }
}
