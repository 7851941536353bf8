use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use regime_core::format::{format_currency, format_percentage, format_slab};
use regime_core::{
    FinancialYear, InvestmentCapPolicy, RegimeComparison, RegimeKind, RuleBook, SalaryBreakdown,
    SalaryInput, TaxResult, TaxYearRules,
};
use regime_data::{NamedProfile, SlabTableLoader, profile_document, profile_loader};
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Compare Old and New regime income tax for one or more taxpayers.
///
/// A single profile is read from a TOML document; a batch from a CSV file
/// with a `name` column and one column per income or deduction category.
#[derive(Parser, Debug)]
#[command(name = "regime-compare")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["profile", "batch"])))]
struct Args {
    /// TOML document describing one taxpayer
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// CSV file with one taxpayer per row
    #[arg(short, long)]
    batch: Option<PathBuf>,

    /// Financial year such as 2025-26 (defaults to the profile's year or the latest known year)
    #[arg(short, long)]
    year: Option<FinancialYear>,

    /// CSV of slab tables that replace or extend the built-in years
    #[arg(short, long)]
    slabs: Option<PathBuf>,

    /// Limit investment-linked deductions to the statutory cap when computing tax
    #[arg(long, default_value_t = false)]
    enforce_investment_cap: bool,

    /// Print the tax charged in each slab
    #[arg(long, default_value_t = false)]
    breakdown: bool,

    /// Print the slab tables in effect before the results
    #[arg(long, default_value_t = false)]
    show_slabs: bool,

    /// Print in-hand salary per regime, withholding the profile's EPF claim
    #[arg(long, default_value_t = false)]
    in_hand: bool,

    /// Annual professional tax withheld from salary, used with --in-hand
    #[arg(long, default_value_t = Decimal::ZERO, requires = "in_hand")]
    professional_tax: Decimal,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

fn load_rule_book(slabs: Option<&Path>) -> Result<RuleBook> {
    let mut book = RuleBook::with_builtin();

    if let Some(path) = slabs {
        let file =
            File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
        let records = SlabTableLoader::parse(file)
            .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;
        let applied = SlabTableLoader::apply(&mut book, &records)
            .with_context(|| format!("Failed to apply slab tables from: {}", path.display()))?;
        info!(tables = applied, path = %path.display(), "loaded slab tables");
    }

    Ok(book)
}

fn load_profiles(args: &Args) -> Result<(Vec<NamedProfile>, Option<FinancialYear>)> {
    if let Some(path) = &args.profile {
        let doc = profile_document::load_from_file(path)
            .with_context(|| format!("Failed to load profile: {}", path.display()))?;
        let name = doc.name.clone().unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "profile".to_string())
        });
        let profile = NamedProfile {
            name,
            income: doc.income.clone(),
            deductions: doc.resolved_deductions(),
        };
        return Ok((vec![profile], doc.financial_year));
    }

    let path = args
        .batch
        .as_deref()
        .context("either --profile or --batch is required")?;
    let profiles = profile_loader::load_from_file(path)
        .with_context(|| format!("Failed to load batch: {}", path.display()))?;
    Ok((profiles, None))
}

fn select_rules(
    book: &RuleBook,
    year: Option<FinancialYear>,
) -> Result<TaxYearRules> {
    let rules = match year {
        Some(year) => book.get(year)?.clone(),
        None => book
            .latest()
            .cloned()
            .context("rule book has no financial years")?,
    };
    Ok(rules)
}

fn print_slabs(rules: &TaxYearRules) {
    for kind in RegimeKind::ALL {
        let regime = rules.regime(kind);
        println!(
            "{} (standard deduction {})",
            regime.kind,
            format_currency(regime.standard_deduction)
        );
        for slab in &regime.slabs {
            println!("  {}", format_slab(slab));
        }
    }
    println!();
}

fn print_result(
    result: &TaxResult,
    breakdown: bool,
) {
    println!("  {}", result.regime);
    println!("    Gross income:       {}", format_currency(result.gross_income));
    println!("    Deductions:         {}", format_currency(result.total_deductions));
    println!("    Taxable income:     {}", format_currency(result.taxable_income));
    println!("    Tax:                {}", format_currency(result.tax_amount));
    println!("    Effective rate:     {}", format_percentage(result.effective_tax_rate));
    println!("    Net income (month): {}", format_currency(result.monthly_net_income));
    println!("    Net income (year):  {}", format_currency(result.yearly_net_income));

    if breakdown {
        for slab in &result.slab_breakdown {
            println!(
                "      {:<40} {:>12} -> {}",
                format_slab(&slab.slab),
                format_currency(slab.taxable_portion),
                format_currency(slab.tax)
            );
        }
    }
}

fn print_comparison(
    name: &str,
    comparison: &RegimeComparison,
    breakdown: bool,
) {
    println!("{name}");
    print_result(&comparison.old_regime, breakdown);
    print_result(&comparison.new_regime, breakdown);
    println!("  Recommended: {}", comparison.recommended_regime);
    println!("  {}", comparison.recommendation);
}

fn salary_input(
    profile: &NamedProfile,
    professional_tax: Decimal,
) -> SalaryInput {
    SalaryInput {
        income: profile.income.clone(),
        epf_contribution: profile.deductions.epf,
        professional_tax,
        hra_exemption: profile.deductions.hra_exemption,
    }
}

fn print_in_hand(breakdown: &SalaryBreakdown) {
    println!(
        "  In hand ({}): {} a month, {} a year after {} withheld and {} tax",
        breakdown.regime,
        format_currency(breakdown.monthly_in_hand),
        format_currency(breakdown.yearly_in_hand),
        format_currency(breakdown.salary_deductions),
        format_currency(breakdown.tax_amount)
    );
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let book = load_rule_book(args.slabs.as_deref())?;
    let (profiles, document_year) = load_profiles(&args)?;

    let mut rules = select_rules(&book, args.year.or(document_year))?;
    if args.enforce_investment_cap {
        rules = rules.with_cap_policy(InvestmentCapPolicy::Enforce);
    }

    println!(
        "Financial year {} (assessment year {})",
        rules.financial_year,
        rules.financial_year.assessment_year()
    );
    println!();

    if args.show_slabs {
        print_slabs(&rules);
    }

    for profile in &profiles {
        let comparison = rules.compare(&profile.income, &profile.deductions);
        print_comparison(&profile.name, &comparison, args.breakdown);

        let cap = rules.investment_cap_utilization(&profile.deductions);
        println!(
            "  Investment cap: {} of {} used ({}%), {} remaining",
            format_currency(cap.used),
            format_currency(cap.limit),
            cap.utilization_percentage,
            format_currency(cap.remaining)
        );

        if args.in_hand {
            let input = salary_input(profile, args.professional_tax);
            for warning in input.validate() {
                warn!(profile = %profile.name, "{warning}");
            }
            for kind in RegimeKind::ALL {
                print_in_hand(&rules.salary_breakdown(kind, &input));
            }
        }
        println!();
    }

    info!(profiles = profiles.len(), financial_year = %rules.financial_year, "comparison complete");

    Ok(())
}
