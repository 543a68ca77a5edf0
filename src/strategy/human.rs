//! Interactive strategy: asks a person at the terminal.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::Mutex;

use tracing::warn;

use super::{Decision, Strategy, TurnContext};

/// Prompts on `output` and reads `h`/`hit`/`s`/`stay` from `input`,
/// asking again until it gets one. End of input counts as a stay.
pub struct Human<R, W> {
    io: Mutex<(R, W)>,
}

impl Human<BufReader<Stdin>, Stdout> {
    /// Prompt on stdout, read from stdin.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Human<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            io: Mutex::new((input, output)),
        }
    }

    fn prompt(input: &mut R, output: &mut W, ctx: &TurnContext<'_>) -> io::Result<Option<Decision>> {
        let player = ctx.player;
        let hand: Vec<String> = player.hand.iter().map(ToString::to_string).collect();
        writeln!(
            output,
            "{} holds {} (round score {}, total {}).",
            player.name,
            hand.join(" "),
            player.round_score(),
            player.total_score
        )?;
        for opponent in ctx.opponents {
            writeln!(output, "  {} is showing {}", opponent.name, opponent.round_score())?;
        }

        let mut line = String::new();
        loop {
            write!(output, "Hit or stay? [h/s] ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match parse_answer(&line) {
                Some(decision) => return Ok(Some(decision)),
                None => writeln!(output, "Please answer 'h' or 's'.")?,
            }
        }
    }
}

fn parse_answer(line: &str) -> Option<Decision> {
    match line.trim().to_ascii_lowercase().as_str() {
        "h" | "hit" => Some(Decision::Hit),
        "s" | "stay" => Some(Decision::Stay),
        _ => None,
    }
}

impl<R, W> Strategy for Human<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn choose_action(&self, ctx: &TurnContext<'_>) -> Decision {
        let mut guard = match self.io.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let (input, output) = &mut *guard;

        match Self::prompt(input, output, ctx) {
            Ok(Some(decision)) => decision,
            Ok(None) => {
                warn!(player = %ctx.player.name, "input closed, staying");
                Decision::Stay
            }
            Err(err) => {
                warn!(player = %ctx.player.name, error = %err, "failed to read decision, staying");
                Decision::Stay
            }
        }
    }

    fn label(&self) -> String {
        "Human".to_string()
    }
}
