//! Desktop IR remote simulator.
//!
//! Feeds raw codes typed on stdin through the real dispatch path, with a
//! mock decoder and a mock light, and prints what happened. Useful for
//! checking a key map without a receiver on the bench.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin ir_sim -- 4
//! ```
//!
//! The argument is the remote selector (default 8, the 24-key remote).
//! Then type one command per line:
//!
//! - `F700FF` or `0xF700FF`: receive that code
//! - `r`: receive a repeat frame
//! - `remote N`: switch to remote `N`
//! - `state`: print the light state
//! - `q`: quit

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use ir_dispatch::hal::{MockDecoder, MockLight};
use ir_dispatch::{IrConfig, IrRemote, PollOutcome, RemoteType, StdClock, REPEAT_CODE};

/// Scheduler tick of the simulated main loop.
const TICK: Duration = Duration::from_millis(5);

type SimRemote = IrRemote<MockDecoder, MockLight, StdClock>;

fn main() -> anyhow::Result<()> {
    let selector = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u8>()
            .with_context(|| format!("invalid remote selector: {}", arg))?,
        None => RemoteType::Ir24.selector(),
    };

    println!("==========================");
    println!("  ir-dispatch simulator");
    println!("==========================");
    println!();

    let config = IrConfig::default().with_selector(selector);
    let mut remote = IrRemote::new(MockDecoder::new(), MockLight::new(), StdClock::new())
        .with_config(config);

    print_remote(&remote);
    settle(&mut remote);

    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let input = line.trim();

        match input {
            "" => {}
            "q" | "quit" => break,
            "state" => print_state(remote.light()),
            "r" => receive(&mut remote, REPEAT_CODE),
            _ if input.starts_with("remote") => {
                match input["remote".len()..].trim().parse::<u8>() {
                    Ok(selector) => {
                        remote.set_remote(selector);
                        print_remote(&remote);
                        settle(&mut remote);
                    }
                    Err(_) => println!("[WARN] usage: remote <selector>"),
                }
            }
            _ => match parse_code(input) {
                Ok(code) => receive(&mut remote, code),
                Err(e) => println!("[WARN] {:#}", e),
            },
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> anyhow::Result<()> {
    print!("> ");
    io::stdout().flush().context("failed to flush stdout")
}

fn parse_code(input: &str) -> anyhow::Result<u32> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    if digits.is_empty() || digits.len() > 8 {
        bail!("not a 32-bit hex code: {}", input);
    }
    u32::from_str_radix(digits, 16).with_context(|| format!("not a hex code: {}", input))
}

/// Run ticks until the receiver reaches a steady state after a remote change.
fn settle(remote: &mut SimRemote) {
    loop {
        match remote.poll() {
            PollOutcome::Enabled => println!("[OK] Receiver enabled"),
            PollOutcome::Released => println!("[OK] Receiver released"),
            PollOutcome::DecoderFault => {
                println!("[WARN] Decoder fault");
                break;
            }
            _ => break,
        }
    }
}

/// Queue `code` on the decoder and tick until it has been consumed.
fn receive(remote: &mut SimRemote, code: u32) {
    if !remote.config().is_enabled() {
        println!("[SKIP] IR disabled");
        return;
    }
    remote.decoder_mut().queue_code(code);
    loop {
        match remote.poll() {
            PollOutcome::Dispatched { code, outcome } => {
                println!("IR recv: 0x{:08X} -> {:?}", code, outcome);
                break;
            }
            PollOutcome::ZeroCode => {
                println!("IR recv: invalid code");
                break;
            }
            PollOutcome::Disabled | PollOutcome::Released | PollOutcome::DecoderFault => {
                println!("[WARN] Receiver not running");
                break;
            }
            _ => thread::sleep(TICK),
        }
    }
}

fn print_remote(remote: &SimRemote) {
    match remote.active_profile() {
        Some(profile) => println!("Remote: {} ({} buttons)", profile.name, profile.len()),
        None => println!("Remote: disabled"),
    }
}

fn print_state(light: &MockLight) {
    println!(
        "on={} bri={} color=0x{:08X} fx={} pal={} sx={} ix={} preset={} white={} (level {})",
        light.on,
        light.brightness,
        light.color,
        light.effect,
        light.palette,
        light.speed,
        light.intensity,
        light.preset,
        light.white_on,
        light.white_level,
    );
}
