//! Final report for goose's aggregated metrics
//!
//! goose collects and aggregates all per-request samples itself; this
//! module only formats the `GooseMetrics` returned by `execute()` in place
//! of goose's built-in printout.

use std::collections::BTreeMap;

use goose::metrics::{GooseMetrics, GooseRequestMetricAggregate};

/// Print a summary of the finished load test.
pub fn print_final_report(metrics: &GooseMetrics) {
    println!("\n╔════════════════════════════════════════════════════════════════╗");
    println!("║                    FINAL TEST REPORT                           ║");
    println!("╚════════════════════════════════════════════════════════════════╝");

    // Stable ordering regardless of the HashMap the metrics arrive in.
    let requests: BTreeMap<&String, &GooseRequestMetricAggregate> =
        metrics.requests.iter().collect();

    for (name, request) in requests {
        print_request_report(name, request, metrics.duration);
    }

    if !metrics.errors.is_empty() {
        println!("\n❌ ERRORS");
        let mut errors: Vec<_> = metrics.errors.values().collect();
        errors.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
        for error in errors {
            println!("   {:>8}x  {}", error.occurrences, error.error);
        }
    }

    println!("\n⏱️  Test Duration: {} seconds", metrics.duration);
    println!("════════════════════════════════════════════════════════════════\n");
}

fn print_request_report(name: &str, request: &GooseRequestMetricAggregate, duration: usize) {
    let timing = &request.raw_data;
    let total = request.success_count + request.fail_count;

    println!("\n📊 {}", name);
    println!("   Total Requests:       {:>10}", total);
    println!("   Succeeded:            {:>10}", request.success_count);
    println!("   Failed:               {:>10}", request.fail_count);

    if duration > 0 {
        let throughput = total as f64 / duration as f64;
        println!("   Throughput:           {:>10.2} requests/sec", throughput);
    }

    if total > 0 {
        let success_rate = (request.success_count as f64 / total as f64) * 100.0;
        println!("   Success Rate:         {:>10.2}%", success_rate);
    }

    if timing.counter > 0 {
        let mean = timing.total_time as f64 / timing.counter as f64;
        println!("\n📈 LATENCY (ms)");
        println!("   Min:                  {:>10}", timing.minimum_time);
        println!(
            "   P50 (Median):         {:>10}",
            percentile(&timing.times, timing.counter, 0.50)
        );
        println!(
            "   P95:                  {:>10}",
            percentile(&timing.times, timing.counter, 0.95)
        );
        println!(
            "   P99:                  {:>10}",
            percentile(&timing.times, timing.counter, 0.99)
        );
        println!("   Max:                  {:>10}", timing.maximum_time);
        println!("   Mean:                 {:>10.2}", mean);
    }

    if !request.status_code_counts.is_empty() {
        let status_codes: BTreeMap<&u16, &usize> = request.status_code_counts.iter().collect();
        println!("\n🌐 STATUS CODES");
        for (status, count) in status_codes {
            println!("   {:>3}:                  {:>10}", status, count);
        }
    }
}

/// Response time at a quantile, read off goose's bucketed time counts.
fn percentile(times: &BTreeMap<usize, usize>, counter: usize, quantile: f64) -> usize {
    if counter == 0 {
        return 0;
    }

    let target = ((counter as f64) * quantile).ceil() as usize;
    let target = target.max(1);

    let mut seen = 0;
    for (time, count) in times {
        seen += count;
        if seen >= target {
            return *time;
        }
    }

    times.keys().last().copied().unwrap_or(0)
}
