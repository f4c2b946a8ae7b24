use crate::config::{CliConfig, ClockKind, OutputFormat};
use serde_json::json;
use std::io::Write;
use xid::{
    AtomicXidGenerator, MonotonicClock, SystemClock, ThreadRandom, TimeSource, Xid, XidGenerator,
};

/// Executes a validated command, writing its output to `out`.
pub fn run<W: Write>(config: CliConfig, out: &mut W) -> anyhow::Result<()> {
    match config {
        CliConfig::New {
            count,
            format,
            clock,
        } => {
            tracing::debug!(count, ?clock, ?format, "generating ids");
            let ids = match clock {
                ClockKind::System => {
                    generate(&AtomicXidGenerator::new(SystemClock, &ThreadRandom), count)
                }
                ClockKind::Monotonic => generate(
                    &AtomicXidGenerator::new(MonotonicClock::default(), &ThreadRandom),
                    count,
                ),
            };
            write_ids(out, &ids, format)
        }
        CliConfig::Inspect { ids, json } => {
            for (i, id) in ids.iter().enumerate() {
                if json {
                    serde_json::to_writer(&mut *out, &describe(id))?;
                    writeln!(out)?;
                } else {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    write_description(out, id)?;
                }
            }
            Ok(())
        }
        CliConfig::Encode { id } => {
            writeln!(out, "{id}")?;
            Ok(())
        }
        CliConfig::Decode { id } => {
            writeln!(out, "{}", hex::encode(id))?;
            Ok(())
        }
    }
}

fn generate<G, T>(generator: &G, count: usize) -> Vec<Xid>
where
    G: XidGenerator<T>,
    T: TimeSource,
{
    (0..count).map(|_| generator.next_id()).collect()
}

fn write_ids<W: Write>(out: &mut W, ids: &[Xid], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for id in ids {
                writeln!(out, "{id}")?;
            }
        }
        OutputFormat::Hex => {
            for id in ids {
                writeln!(out, "{}", hex::encode(id))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, ids)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_description<W: Write>(out: &mut W, id: &Xid) -> std::io::Result<()> {
    writeln!(out, "id:        {id}")?;
    writeln!(out, "hex:       {}", hex::encode(id))?;
    writeln!(out, "timestamp: {}", id.timestamp())?;
    writeln!(out, "machine:   {}", hex::encode(id.machine()))?;
    writeln!(out, "pid:       {}", id.pid())?;
    writeln!(out, "counter:   {}", id.counter())
}

fn describe(id: &Xid) -> serde_json::Value {
    json!({
        "id": id,
        "hex": hex::encode(id),
        "timestamp": id.timestamp(),
        "machine": hex::encode(id.machine()),
        "pid": id.pid(),
        "counter": id.counter(),
    })
}
