//! MIPS pipeline simulator CLI.
//!
//! This binary is the batch front end of the simulator. It performs:
//! 1. **Run:** Load a hex-word program, run it to `SYSCALL` (or a cycle bound), then print
//!    the register file, optional memory ranges and statistics.
//! 2. **Disasm:** List a program file as addressed assembly.
//!
//! Startup faults (unreadable program, malformed token, bad config) and address faults
//! during the run exit with status 1.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mupipe_core::common::constants::MIPS_REGS;
use mupipe_core::config::Config;
use mupipe_core::isa::abi::reg_name;
use mupipe_core::isa::disasm::disassemble;
use mupipe_core::sim::loader;
use mupipe_core::{SimError, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "mupipe",
    author,
    version,
    about = "Cycle-level 5-stage pipelined MIPS32 simulator",
    long_about = "Run a program of whitespace-separated hexadecimal words on a five-stage MIPS32 pipeline.\n\nExamples:\n  mupipe run -f tests/add.hex\n  mupipe run -f prog.hex --trace --max-cycles 200\n  mupipe run -f prog.hex --mdump 0x10000000:0x1000001c --json\n  mupipe disasm -f prog.hex"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program until SYSCALL, an address fault, or the cycle bound.
    Run {
        /// Program file (hex words).
        #[arg(short, long)]
        file: PathBuf,

        /// JSON configuration file (memory layout, text base, zero-register policy).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log every pipeline stage event (sets the log level to `trace`).
        #[arg(long)]
        trace: bool,

        /// Stop after this many cycles even if the program has not halted.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Print the program listing before running.
        #[arg(long)]
        print_program: bool,

        /// Memory range to dump after the run, as `START:STOP` (hex, inclusive).
        #[arg(long, value_parser = parse_range)]
        mdump: Vec<(u32, u32)>,

        /// Statistics sections to print (summary, instruction_mix, hazards); all if omitted.
        #[arg(long, value_delimiter = ',')]
        stats: Vec<String>,

        /// Print statistics as JSON instead of the text report.
        #[arg(long)]
        json: bool,
    },

    /// Disassemble a program file.
    Disasm {
        /// Program file (hex words).
        #[arg(short, long)]
        file: PathBuf,

        /// Address of the first word.
        #[arg(long, value_parser = parse_hex, default_value = "0x00400000")]
        base: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            config,
            trace,
            max_cycles,
            print_program,
            mdump,
            stats,
            json,
        } => cmd_run(&RunArgs {
            file,
            config,
            trace,
            max_cycles,
            print_program,
            mdump,
            stats,
            json,
        }),
        Commands::Disasm { file, base } => cmd_disasm(&file, base),
    }
}

struct RunArgs {
    file: PathBuf,
    config: Option<PathBuf>,
    trace: bool,
    max_cycles: Option<u64>,
    print_program: bool,
    mdump: Vec<(u32, u32)>,
    stats: Vec<String>,
    json: bool,
}

/// Loads the configuration, the program, runs, and reports.
fn cmd_run(args: &RunArgs) {
    let config = args
        .config
        .as_deref()
        .map_or_else(|| Ok(Config::default()), load_config)
        .unwrap_or_else(|e| fatal(&e));

    init_tracing(args.trace || config.general.trace_instructions);
    info!(
        text_base = config.general.text_base,
        regions = config.memory.regions.len(),
        zero = ?config.pipeline.zero_register,
        "configuration loaded"
    );

    let mut sim = Simulator::new(config).unwrap_or_else(|e| fatal(&e));
    let words = sim
        .load_program_file(&args.file)
        .unwrap_or_else(|e| fatal(&e));

    println!("[*] Loaded {} words from {}", words, args.file.display());
    if args.print_program && words > 0 {
        let text_base = sim.config().general.text_base;
        let last = text_base.wrapping_add(4 * (words as u32 - 1));
        match sim.mdump(text_base, last) {
            Ok(listing) => print_listing(listing),
            Err(e) => eprintln!("[!] listing: {e}"),
        }
    }

    let outcome = match args.max_cycles {
        Some(n) => sim.step(n),
        None => sim.run_all(),
    };

    let status = match outcome {
        Ok(cycles) => {
            if sim.is_running() {
                println!("\n[*] Stopped after {cycles} cycles without halting");
            } else {
                println!("\n[*] Halted by SYSCALL after {cycles} cycles");
            }
            0
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            1
        }
    };

    dump_registers(&sim);
    for &(start, stop) in &args.mdump {
        match sim.mdump(start, stop) {
            Ok(words) => dump_memory(&words),
            Err(e) => eprintln!("[!] mdump {start:#010x}:{stop:#010x}: {e}"),
        }
    }
    if args.json {
        match serde_json::to_string_pretty(sim.stats()) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("[!] stats: {e}"),
        }
    } else {
        sim.stats().print_sections(&args.stats);
    }
    process::exit(status);
}

/// Prints an addressed listing of a program file.
fn cmd_disasm(file: &Path, base: u32) {
    let words = loader::load_program_file(file).unwrap_or_else(|e| fatal(&e));
    let listing = words
        .iter()
        .zip((0u32..).map(|i| base.wrapping_add(i * 4)))
        .map(|(&w, addr)| (addr, w))
        .collect();
    print_listing(listing);
}

fn load_config(path: &Path) -> Result<Config, SimError> {
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_json(&text)
}

fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_listing(words: Vec<(u32, u32)>) {
    for (addr, w) in words {
        println!("{addr:#010x}  {w:08x}  {}", disassemble(w));
    }
}

fn dump_registers(sim: &Simulator) {
    println!("\nPC = {:#010x}   HI = {:#010x}   LO = {:#010x}", sim.pc(), sim.hi(), sim.lo());
    let regs = sim.state().gpr.as_array();
    for i in (0..MIPS_REGS).step_by(4) {
        let row: Vec<String> = (i..i + 4)
            .map(|r| format!("${r:<2} {:>4} = {:#010x}", reg_name(r), regs[r]))
            .collect();
        println!("{}", row.join("   "));
    }
    println!(
        "cycles = {}   instructions = {}",
        sim.cycles(),
        sim.instructions()
    );
}

fn dump_memory(words: &[(u32, u32)]) {
    println!("\nAddress      Value");
    for (addr, w) in words {
        println!("{addr:#010x}   {w:#010x}");
    }
}

fn parse_hex(s: &str) -> Result<u32, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16).map_err(|e| format!("invalid hex address '{s}': {e}"))
}

fn parse_range(s: &str) -> Result<(u32, u32), String> {
    let (start, stop) = s
        .split_once(':')
        .ok_or_else(|| format!("expected START:STOP, got '{s}'"))?;
    Ok((parse_hex(start)?, parse_hex(stop)?))
}

fn fatal(e: &SimError) -> ! {
    eprintln!("[!] FATAL: {e}");
    process::exit(1);
}
