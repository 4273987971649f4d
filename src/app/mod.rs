pub mod input;
pub mod state;

pub use input::{Command, CommandError};
pub use state::{App, StatsSnapshot};

use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// How long the interactive loop waits for input while paused.
const IDLE_POLL: Duration = Duration::from_millis(250);

impl App {
    /// One line of output describing the current state.
    pub fn report(&self, json: bool) -> Result<String> {
        if json {
            Ok(serde_json::to_string(&self.stats())?)
        } else {
            Ok(format!("[tick {}] {}", self.population().tick(), self.status_line()))
        }
    }

    /// Runs unpaced until `max_ticks` is reached or every plant is dead.
    ///
    /// Prints a report every `report_every` ticks (0 prints only the final
    /// one).
    pub fn run_headless(
        &mut self,
        max_ticks: Option<u64>,
        report_every: u64,
        json: bool,
    ) -> Result<()> {
        self.start();
        while !self.quit {
            if max_ticks.is_some_and(|limit| self.population().tick() >= limit) {
                break;
            }
            if self.population().is_extinct() {
                tracing::info!(tick = self.population().tick(), "Population went extinct");
                break;
            }
            self.step();
            if report_every > 0 && self.population().tick() % report_every == 0 {
                println!("{}", self.report(json)?);
            }
        }
        self.pause();
        println!("{}", self.report(json)?);
        Ok(())
    }

    /// Paced loop driven by commands read from `input`.
    ///
    /// Ticks honour the population's tick interval while running. Ends on
    /// `quit`, end of input, or Ctrl+C.
    pub async fn run_interactive<I, O>(
        &mut self,
        input: I,
        mut output: O,
        json: bool,
    ) -> Result<()>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Ctrl+C received, shutting down");
            shutdown_clone.store(true, Ordering::SeqCst);
        });

        let mut lines = input.lines();
        let mut input_open = true;

        while !self.quit && !shutdown.load(Ordering::SeqCst) {
            let wait = self.time_until_due(Instant::now()).unwrap_or(IDLE_POLL);

            tokio::select! {
                line = lines.next_line(), if input_open => {
                    match line? {
                        Some(line) => {
                            if let Some(text) = self.handle_line(&line) {
                                output.write_all(format!("{text}\n").as_bytes()).await?;
                            }
                        }
                        None => {
                            input_open = false;
                            if !self.is_running() {
                                break;
                            }
                        }
                    }
                }
                () = tokio::time::sleep(wait) => {
                    if self.update(Instant::now()) {
                        output
                            .write_all(format!("{}\n", self.report(json)?).as_bytes())
                            .await?;
                        if self.population().is_extinct() {
                            tracing::info!(
                                tick = self.population().tick(),
                                "Population went extinct"
                            );
                            self.pause();
                        }
                    }
                    if !input_open && !self.is_running() {
                        break;
                    }
                }
            }
            output.flush().await?;
        }

        output.flush().await?;
        Ok(())
    }
}
