//! Command dispatch: reads the token stream, drives the map, and emits one
//! response line per command.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::commands::stream::TokenStream;
use crate::map::HexMap;

/// A command interpreter owning the current map (none until `init`).
///
/// Mutation commands answer `OK`/`KO`; travel queries answer a decimal cost
/// or `-1` for every failure, unreachable destinations included.
#[derive(Default)]
pub struct Session {
    map: Option<HexMap>,
}

impl Session {
    pub fn new() -> Self {
        Self { map: None }
    }

    /// Process commands from `input` until it is exhausted, writing one
    /// response line per command to `output`, flushed per command so the
    /// stream can be driven interactively.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        let mut tokens = TokenStream::new(input);
        while let Some(word) = tokens.next_token()? {
            match word.as_str() {
                "init" => {
                    let reply = match read_args::<2, _>(&mut tokens)? {
                        Some([cols, rows]) => self.init(cols, rows),
                        None => "KO",
                    };
                    writeln!(output, "{reply}")?;
                }
                "change_cost" => {
                    let reply = match read_args::<4, _>(&mut tokens)? {
                        Some([x, y, v, r]) => self.change_cost(x, y, v, r),
                        None => "KO",
                    };
                    writeln!(output, "{reply}")?;
                }
                "toggle_air_route" => {
                    let reply = match read_args::<4, _>(&mut tokens)? {
                        Some([x1, y1, x2, y2]) => self.toggle_air_route((x1, y1), (x2, y2)),
                        None => "KO",
                    };
                    writeln!(output, "{reply}")?;
                }
                "travel_cost" => {
                    let cost = match read_args::<4, _>(&mut tokens)? {
                        Some([xs, ys, xd, yd]) => self.travel_cost((xs, ys), (xd, yd)),
                        None => -1,
                    };
                    writeln!(output, "{cost}")?;
                }
                other => {
                    debug!(command = other, "unknown command");
                    writeln!(output, "KO")?;
                }
            }
            output.flush()?;
        }
        Ok(())
    }

    fn init(&mut self, cols: i32, rows: i32) -> &'static str {
        match HexMap::new(cols, rows) {
            Ok(map) => {
                self.map = Some(map);
                "OK"
            }
            Err(err) => {
                debug!(%err, "init rejected");
                "KO"
            }
        }
    }

    fn change_cost(&mut self, x: i32, y: i32, v: i32, r: i32) -> &'static str {
        let Some(map) = self.map.as_mut() else {
            return "KO";
        };
        match map.change_cost(x, y, v, r) {
            Ok(()) => "OK",
            Err(err) => {
                debug!(%err, "change_cost rejected");
                "KO"
            }
        }
    }

    fn toggle_air_route(&mut self, from: (i32, i32), to: (i32, i32)) -> &'static str {
        let Some(map) = self.map.as_mut() else {
            return "KO";
        };
        match map.toggle_air_route(from, to) {
            Ok(_) => "OK",
            Err(err) => {
                debug!(%err, "toggle_air_route rejected");
                "KO"
            }
        }
    }

    fn travel_cost(&mut self, from: (i32, i32), to: (i32, i32)) -> i32 {
        let Some(map) = self.map.as_mut() else {
            return -1;
        };
        match map.travel_cost(from, to) {
            Ok(Some(cost)) => cost,
            Ok(None) => -1,
            Err(err) => {
                debug!(%err, "travel_cost rejected");
                -1
            }
        }
    }
}

/// Read `N` integer arguments. On a malformed or missing token, stop and
/// leave the offender queued for re-interpretation as a command word.
fn read_args<const N: usize, R: BufRead>(
    tokens: &mut TokenStream<R>,
) -> io::Result<Option<[i32; N]>> {
    let mut args = [0i32; N];
    for slot in &mut args {
        match tokens.next_int()? {
            Some(value) => *slot = value,
            None => return Ok(None),
        }
    }
    Ok(Some(args))
}

/// Run a whole command script and collect the response text.
pub fn run_script(script: &str) -> String {
    let mut session = Session::new();
    let mut out = Vec::new();
    // In-memory readers and writers cannot fail.
    let _ = session.run(script.as_bytes(), &mut out);
    String::from_utf8_lossy(&out).into_owned()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
