use crate::metrics::RunSummary;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Renders the fixed-order summary block.
///
/// Field order and column widths match the classic siege-style report.
/// With zero successes the longest/shortest rows print 0.00 rather than
/// the internal sentinels.
#[must_use]
pub fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let totals = summary.totals;
    let (longest, shortest) = if totals.success == 0 {
        (0.0, 0.0)
    } else {
        (totals.longest.as_secs_f64(), totals.shortest.as_secs_f64())
    };

    vec![
        format!("Transactions: {:>21} hits", summary.transactions),
        format!("Availability: {:>21.2} %", summary.availability),
        format!(
            "Data transferred: {:>17.2} MB",
            totals.data_bytes as f64 / BYTES_PER_MB
        ),
        format!("Response time: {:>20.2} secs", summary.mean_response_time),
        format!(
            "Transaction rate: {:>17.2} trans/sec",
            summary.transaction_rate
        ),
        format!("Throughput: {:>23.2} MB/sec", summary.throughput / BYTES_PER_MB),
        format!("Successful transactions: {:>10}", totals.success),
        format!("Failed transactions: {:>14}", totals.failed),
        format!("Longest transaction: {:>14.2}", longest),
        format!("Shortest transaction: {:>13.2}", shortest),
    ]
}

pub fn print_summary(summary: &RunSummary) {
    for line in summary_lines(summary) {
        println!("{}", line);
    }
}
