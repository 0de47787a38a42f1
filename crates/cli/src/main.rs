use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use planar::solve::{Case, RadicandPolicy, Sign, Solution, SolveCfg};
use planar::vec2::{Keys, V2};
use serde_json::{json, Value};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Planar vector equation solver and converter")]
struct Cmd {
    /// Fixed decimal places for printed vectors (full precision if omitted)
    #[arg(long, global = true)]
    decimals: Option<usize>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve one of the five cases; vectors are JSON key sets like '{"r":5,"w":0.5}'
    Solve {
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        case: u8,
        #[arg(long, default_value = "{}")]
        a: String,
        #[arg(long, default_value = "{}")]
        b: String,
        #[arg(long)]
        c: String,
        #[arg(long, value_enum, default_value_t = SignArg::Pos)]
        sign: SignArg,
        /// Fail on negative radicands instead of clamping them
        #[arg(long)]
        reject: bool,
    },
    /// Normalize a JSON key set to cartesian and polar form
    Convert {
        #[arg(long)]
        desc: String,
    },
    /// Print version and case table
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SignArg {
    Pos,
    Neg,
}

impl From<SignArg> for Sign {
    fn from(s: SignArg) -> Self {
        match s {
            SignArg::Pos => Sign::Pos,
            SignArg::Neg => Sign::Neg,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = match cmd.action {
        Action::Solve {
            case,
            a,
            b,
            c,
            sign,
            reject,
        } => solve(case, &a, &b, &c, sign.into(), reject, cmd.decimals)?,
        Action::Convert { desc } => convert(&desc, cmd.decimals)?,
        Action::Report => report(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn parse_keys(name: &str, raw: &str) -> Result<Keys> {
    serde_json::from_str(raw).with_context(|| format!("parsing --{name} as a vector key set"))
}

fn vec_json(v: V2, decimals: Option<usize>) -> Value {
    json!({
        "x": v.x,
        "y": v.y,
        "r": v.r(),
        "w": v.w(),
        "text": v.to_string_with(decimals),
    })
}

fn solve(
    index: u8,
    a: &str,
    b: &str,
    c: &str,
    sign: Sign,
    reject: bool,
    decimals: Option<usize>,
) -> Result<Value> {
    let case = Case::from_index(index).with_context(|| format!("unknown case {index}"))?;
    let (a, b, c) = (parse_keys("a", a)?, parse_keys("b", b)?, parse_keys("c", c)?);
    let cfg = SolveCfg {
        radicand: if reject {
            RadicandPolicy::Reject
        } else {
            RadicandPolicy::Clamp
        },
        ..SolveCfg::default()
    };
    tracing::info!(case = index, relation = case.relation(), sign = ?sign, reject, "solve");
    let Solution { a, b, status } = case.solve_keys(&a, &b, &c, sign, &cfg)?;
    Ok(json!({
        "case": index,
        "relation": case.relation(),
        "sign": sign,
        "a": vec_json(a, decimals),
        "b": vec_json(b, decimals),
        "status": status,
    }))
}

fn convert(desc: &str, decimals: Option<usize>) -> Result<Value> {
    let keys = parse_keys("desc", desc)?;
    let form = keys.classify();
    tracing::info!(form = ?form, "convert");
    let v = form.to_cartesian();
    Ok(json!({
        "form": form,
        "cartesian": { "x": v.x, "y": v.y },
        "polar": form.to_polar(),
        "text": v.to_string_with(decimals),
    }))
}

fn report() -> Value {
    let cases: Vec<Value> = Case::ALL
        .iter()
        .map(|c| {
            json!({
                "case": c.index(),
                "name": c,
                "relation": c.relation(),
                "reads": c.reads(),
                "branches": c.has_branches(),
            })
        })
        .collect();
    json!({
        "version": planar::VERSION,
        "cases": cases,
    })
}
