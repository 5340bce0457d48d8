use crate::io::Pipe;
use crate::terminal::{Command, Terminal};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Difficulty;
use lib::game::{Config, Phase, Session};
use std::time::Duration;
use tokio::io::{stdin, stdout, AsyncRead, AsyncWrite};
use tokio::time::sleep;
use tracing::{info, instrument};

/// Play against the computer in the terminal.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The initial layout of the board, overrides the configuration.
    #[clap(short, long)]
    difficulty: Option<Difficulty>,

    /// The game configuration in RON format.
    #[clap(short, long, default_value_t)]
    config: Config,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub async fn execute(self) -> Result<(), Anyhow> {
        let config = Config {
            difficulty: self.difficulty.unwrap_or(self.config.difficulty),
            ..self.config
        };

        Game::new(&config, Pipe::new(stdout(), stdin())).run().await
    }
}

struct Game<W: AsyncWrite, R: AsyncRead> {
    session: Session<Terminal>,
    pacing: Duration,
    io: Pipe<W, R>,
}

impl<W: AsyncWrite + Send + Unpin, R: AsyncRead + Send + Unpin> Game<W, R> {
    fn new(config: &Config, io: Pipe<W, R>) -> Self {
        Game {
            session: Session::with_config(config, Terminal::default()),
            pacing: config.pacing,
            io,
        }
    }

    /// Writes out everything rendered since the last call.
    async fn render(&mut self) -> Result<(), Anyhow> {
        let msgs: Vec<_> = self.session.presenter_mut().drain().collect();
        for msg in msgs {
            self.io.send(&msg).await?;
        }

        self.io.flush().await?;
        Ok(())
    }

    async fn click(&mut self, row: i8, col: i8) -> Result<(), Anyhow> {
        match self.session.on_cell_clicked(row, col) {
            Err(e) => self.io.send(&e.to_string()).await?,
            Ok(Phase::ComputingOpponentMove) => {
                self.render().await?;
                sleep(self.pacing).await;
                self.session.play_opponent()?;
            }
            Ok(_) => {}
        }

        Ok(())
    }

    #[instrument(level = "trace", skip(self), err)]
    async fn run(mut self) -> Result<(), Anyhow> {
        self.io.send(Command::HELP).await?;

        loop {
            self.render().await?;

            let Some(line) = self.io.recv().await? else {
                break;
            };

            match line.parse() {
                Err(e) => self.io.send(&format!("{e}")).await?,
                Ok(Command::Click(row, col)) => self.click(row, col).await?,
                Ok(Command::Reset) => self.session.reset(),
                Ok(Command::Difficulty(d)) => self.session.select_difficulty(d),
                Ok(Command::Help) => self.io.send(Command::HELP).await?,
                Ok(Command::Quit) => break,
            }
        }

        info!("leaving the game");
        self.render().await
    }
}
