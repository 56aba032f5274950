use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lexbloom_core::{estimate, FilterConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod wordlist;

use wordlist::{Normalize, Vocabulary};

#[derive(Parser)]
#[command(name = "lexbloom", version, about = "lexbloom — spell check against a word list via a Bloom filter")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,

    /// Newline-delimited word list
    #[arg(long, global = true, default_value = "/usr/share/dict/words")]
    dict: PathBuf,

    /// JSON filter config ({"num_bits": .., "num_probes": ..})
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Bit array length m (overrides config)
    #[arg(long, global = true)]
    bits: Option<usize>,

    /// Probe count k (overrides config)
    #[arg(long, global = true)]
    probes: Option<usize>,

    /// Normalization applied to list words and queries
    #[arg(long, global = true, value_enum, default_value_t = Normalize::Lower)]
    normalize: Normalize,
}

#[derive(Subcommand)]
enum Cmd {
    /// Check one or more words
    Check {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Read words from stdin until EOF
    Interactive,

    /// Measure the false-positive rate with random words
    FpTest {
        #[arg(long, default_value_t = 10_000)]
        trials: usize,
        #[arg(long, default_value_t = 5)]
        len: usize,
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print filter parameters and fill
    Stats,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn filter_config(cli: &Cli) -> Result<FilterConfig> {
    let mut cfg = match &cli.config {
        Some(p) => FilterConfig::load(p).with_context(|| format!("config {}", p.display()))?,
        None => FilterConfig::default(),
    };
    if let Some(m) = cli.bits {
        cfg.num_bits = m;
    }
    if let Some(k) = cli.probes {
        cfg.num_probes = k;
    }
    Ok(cfg)
}

fn load_vocabulary(path: &Path, cfg: &FilterConfig, normalize: Normalize) -> Result<Vocabulary> {
    let filter = cfg.build()?;
    let file = File::open(path).with_context(|| format!("open word list {}", path.display()))?;
    let mut vocab = Vocabulary::new(filter, normalize);
    vocab
        .load(BufReader::new(file))
        .with_context(|| format!("read word list {}", path.display()))?;
    info!(
        words = vocab.words.len(),
        skipped = vocab.skipped,
        m = cfg.num_bits,
        k = cfg.num_probes,
        "word list loaded"
    );
    Ok(vocab)
}

fn report(vocab: &Vocabulary, raw: &[u8]) {
    let shown = String::from_utf8_lossy(raw);
    match vocab.lookup(raw) {
        Ok(true) => println!("\"{shown}\" might be in the dictionary"),
        Ok(false) => println!("\"{shown}\" is definitely not in the dictionary"),
        Err(e) => eprintln!("\"{shown}\": {e}"),
    }
}

fn random_word<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| rng.random_range(b'a'..=b'z') as char).collect()
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let cfg = filter_config(&cli)?;
    let vocab = load_vocabulary(&cli.dict, &cfg, cli.normalize)?;

    match cli.cmd {
        Cmd::Check { words } => {
            for w in &words {
                report(&vocab, w.as_bytes());
            }
        }
        Cmd::Interactive => {
            println!("Enter words to spell check (Ctrl+D to exit):");
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut buf = Vec::new();
            loop {
                buf.clear();
                if input.read_until(b'\n', &mut buf)? == 0 {
                    break;
                }
                let line = wordlist::trim_eol(&buf);
                if line.is_empty() {
                    continue;
                }
                report(&vocab, line);
            }
        }
        Cmd::FpTest { trials, len, seed } => {
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_os_rng(),
            };
            let mut false_positives = 0usize;
            for _ in 0..trials {
                let w = random_word(&mut rng, len);
                if vocab.filter.query(&w) && !vocab.contains_exact(&w) {
                    false_positives += 1;
                }
            }
            let measured = if trials == 0 {
                0.0
            } else {
                false_positives as f64 / trials as f64
            };
            let expected = estimate::false_positive_rate(
                vocab.filter.addressable_bits(),
                vocab.filter.num_probes(),
                vocab.words.len(),
            );
            println!("trials: {trials}  false positives: {false_positives}");
            println!("false positive rate: {:.4}%", measured * 100.0);
            println!("theoretical rate:    {:.4}%", expected * 100.0);
        }
        Cmd::Stats => {
            let f = &vocab.filter;
            println!("bits (m):        {}", f.num_bits());
            println!("addressable:     {}", f.addressable_bits());
            println!("probes (k):      {}", f.num_probes());
            println!("words loaded:    {}", vocab.words.len());
            println!("lines skipped:   {}", vocab.skipped);
            println!("bits set:        {}", f.bits_set());
            println!("fill ratio:      {:.6}", f.fill_ratio());
            println!("est. fp rate:    {:.6}", f.estimated_false_positive_rate());
            println!("est. count:      {:.0}", f.estimated_count());
        }
    }
    Ok(())
}
