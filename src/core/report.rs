use crate::domain::lotto::Lotto;
use crate::domain::rank::{Rank, WinningStatistics};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct GameReport<'a> {
    tickets: &'a [Lotto],
    winning: &'a Lotto,
    statistics: &'a WinningStatistics,
    profit_rate: f64,
}

fn tickets(count: usize) -> String {
    if count == 1 {
        "1 ticket".to_string()
    } else {
        format!("{} tickets", count)
    }
}

pub fn render_tickets(lottos: &[Lotto]) -> String {
    let mut lines = vec![format!("Purchased {}.", tickets(lottos.len()))];
    lines.extend(lottos.iter().map(ToString::to_string));
    lines.join("\n") + "\n"
}

pub fn render_statistics(stats: &WinningStatistics) -> String {
    let mut lines = vec!["Winning statistics".to_string(), "---------".to_string()];
    lines.extend(Rank::WINNING.iter().map(|&rank| {
        format!(
            "{} matches ({} won) - {}",
            rank.match_count(),
            rank.prize(),
            tickets(stats.count(rank))
        )
    }));
    lines.push(format!("Total profit rate is {:.2}", stats.profit_rate()));
    lines.join("\n") + "\n"
}

pub fn render(
    format: OutputFormat,
    lottos: &[Lotto],
    winning: &Lotto,
    stats: &WinningStatistics,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "{}\n{}",
            render_tickets(lottos),
            render_statistics(stats)
        )),
        OutputFormat::Json => {
            let report = GameReport {
                tickets: lottos,
                winning,
                statistics: stats,
                profit_rate: stats.profit_rate(),
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

/// Final play output. Once the tickets were previewed for a prompt, the text
/// report only carries the statistics; JSON is always the complete report.
pub fn render_result(
    format: OutputFormat,
    tickets_previewed: bool,
    lottos: &[Lotto],
    winning: &Lotto,
    stats: &WinningStatistics,
) -> Result<String> {
    match (format, tickets_previewed) {
        (OutputFormat::Text, true) => Ok(render_statistics(stats)),
        _ => render(format, lottos, winning, stats),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::{PurchaseAmount, DEFAULT_TICKET_PRICE};

    fn fixture() -> (Vec<Lotto>, Lotto, WinningStatistics) {
        let lottos = vec![Lotto::from_values(&[1, 2, 3, 40, 41, 42]).unwrap()];
        let winning = Lotto::from_values(&[1, 2, 3, 4, 5, 6]).unwrap();
        let purchase = PurchaseAmount::parse("1000", DEFAULT_TICKET_PRICE).unwrap();
        let stats = WinningStatistics::tally(&lottos, &winning, &purchase);
        (lottos, winning, stats)
    }

    #[test]
    fn test_render_text() {
        let (lottos, winning, stats) = fixture();
        let text = render(OutputFormat::Text, &lottos, &winning, &stats).unwrap();
        assert!(text.contains("Purchased 1 ticket."));
        assert!(text.contains("[1, 2, 3, 40, 41, 42]"));
        assert!(text.contains("3 matches (5000 won) - 1 ticket\n"));
        assert!(text.contains("4 matches (50000 won) - 0 tickets"));
        assert!(text.contains("Total profit rate is 5.00"));
    }

    #[test]
    fn test_render_json() {
        let (lottos, winning, stats) = fixture();
        let json = render(OutputFormat::Json, &lottos, &winning, &stats).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tickets"][0][3], 40);
        assert_eq!(value["statistics"]["counts"]["fourth"], 1);
        assert_eq!(value["statistics"]["total_prize"], 5000);
    }

    #[test]
    fn test_render_result_json_after_preview_is_pure_json() {
        let (lottos, winning, stats) = fixture();
        let out = render_result(OutputFormat::Json, true, &lottos, &winning, &stats).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["tickets"].as_array().map(Vec::len), Some(1));
        assert!(!out.contains("Purchased"));
    }

    #[test]
    fn test_render_result_text_after_preview_skips_tickets() {
        let (lottos, winning, stats) = fixture();
        let out = render_result(OutputFormat::Text, true, &lottos, &winning, &stats).unwrap();
        assert!(out.starts_with("Winning statistics"));
        assert!(!out.contains("Purchased"));

        let full = render_result(OutputFormat::Text, false, &lottos, &winning, &stats).unwrap();
        assert!(full.starts_with("Purchased 1 ticket."));
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_name("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("xml"), None);
    }
}
