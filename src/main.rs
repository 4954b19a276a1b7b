use clap::Parser;
use lotto_kata::core::report::{self, OutputFormat};
use lotto_kata::utils::error::{ErrorSeverity, LottoError};
use lotto_kata::utils::{logger, validation::Validate};
use lotto_kata::{
    CliConfig, Command, GameConfig, Lotto, LottoGame, RandomNumberGenerator, StringAddCalculator,
};
use std::io::{self, BufRead, Write};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting lotto CLI");
    tracing::debug!("CLI config: {:?}", config);

    let outcome = config.validate().and_then(|_| run(&config));

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> lotto_kata::Result<()> {
    match &config.command {
        Command::Sum { expression } => {
            let input = expression.replace("\\n", "\n");
            let sum = StringAddCalculator::calculate(&input)?;
            println!("{}", sum);
            Ok(())
        }
        Command::Play {
            amount,
            winning,
            seed,
            config: config_path,
            json,
        } => {
            let game_config = match config_path {
                Some(path) => {
                    tracing::info!("📁 Loading configuration from: {}", path);
                    GameConfig::from_file(path)?
                }
                None => GameConfig::default(),
            };
            game_config.validate()?;

            // 命令列參數優先於設定檔
            let seed = (*seed).or(game_config.seed());
            let format = if *json {
                OutputFormat::Json
            } else {
                game_config.output_format()
            };

            let generator = match seed {
                Some(seed) => {
                    tracing::debug!("Using seeded generator ({})", seed);
                    RandomNumberGenerator::seeded(seed)
                }
                None => RandomNumberGenerator::new(),
            };

            let mut game = LottoGame::with_unit(amount, game_config.ticket_price(), generator)?;
            game.start()?;

            let prompted = winning.is_none();
            let winning: Lotto = match winning {
                Some(input) => input.parse()?,
                None => {
                    // JSON 模式下 stdout 只輸出報告，預覽與提示改寫到 stderr
                    match format {
                        OutputFormat::Text => prompt_winning(&mut io::stdout(), game.lottos())?,
                        OutputFormat::Json => prompt_winning(&mut io::stderr(), game.lottos())?,
                    }
                }
            };

            let stats = game.result(&winning);
            tracing::info!(
                "Total prize {} for purchase of {}",
                stats.total_prize(),
                stats.purchase_amount()
            );

            let output =
                report::render_result(format, prompted, game.lottos(), &winning, &stats)?;
            println!("{}", output);
            Ok(())
        }
    }
}

fn prompt_winning(out: &mut impl Write, lottos: &[Lotto]) -> lotto_kata::Result<Lotto> {
    write!(out, "{}", report::render_tickets(lottos))?;
    write!(out, "Enter last week's winning numbers: ")?;
    out.flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(LottoError::EmptyTicket);
    }
    line.trim().parse()
}
