#[cfg(test)]
mod tests {
    use crate::errors::Result;
    use crate::portfolio::performance::{
        compare_with_benchmarks, BenchmarkQuote, PerformanceService, PerformanceServiceTrait,
    };
    use crate::transactions::{Transaction, TransactionSourceTrait, TransactionType};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn buy(id: i64, txn_date: NaiveDate, quantity: Decimal, price: Decimal) -> Transaction {
        Transaction {
            id,
            asset_id: 1,
            txn_type: TransactionType::Buy,
            txn_date,
            quantity,
            price,
            fees: Decimal::ZERO,
            notes: None,
        }
    }

    fn quote(label: &str, start: Decimal, end: Decimal) -> BenchmarkQuote {
        BenchmarkQuote {
            label: label.to_string(),
            start,
            end,
        }
    }

    struct MockTransactionSource {
        transactions: Vec<Transaction>,
    }

    impl TransactionSourceTrait for MockTransactionSource {
        fn get_transactions(&self) -> Result<Vec<Transaction>> {
            Ok(self.transactions.clone())
        }
    }

    #[test]
    fn test_comparison_rebases_portfolio_and_interpolates_benchmark() {
        let txns = vec![
            buy(1, date(2024, 1, 1), dec!(1), dec!(1000)),
            buy(2, date(2024, 2, 1), dec!(1), dec!(500)),
            buy(3, date(2024, 3, 1), dec!(1), dec!(500)),
        ];
        let benchmarks = vec![quote("NIFTY 50", dec!(22000), dec!(24200))];

        let comparison = compare_with_benchmarks(&txns, &benchmarks);

        let growth: Vec<Decimal> = comparison.growth.iter().map(|p| p.value).collect();
        assert_eq!(growth, vec![dec!(100), dec!(150), dec!(200)]);

        assert_eq!(comparison.benchmarks.len(), 1);
        let line = &comparison.benchmarks[0];
        // 24200 / 22000 * 100 = 110, drawn linearly across three labels
        assert_eq!(line.values, vec![dec!(100), dec!(105), dec!(110)]);
        assert_eq!(line.return_pct, Some(dec!(10)));

        let stats = comparison.stats.unwrap();
        assert_eq!(stats.invested_start, dec!(1000));
        assert_eq!(stats.invested_end, dec!(2000));
        assert_eq!(stats.portfolio_return_pct, Some(dec!(100)));
        assert_eq!(stats.outperformance[0].outperformance_pct, Some(dec!(90)));
    }

    #[test]
    fn test_flat_benchmark_when_start_equals_end() {
        let txns = vec![
            buy(1, date(2024, 1, 1), dec!(1), dec!(100)),
            buy(2, date(2024, 2, 1), dec!(1), dec!(100)),
        ];
        let benchmarks = vec![quote("SENSEX", dec!(72000), dec!(72000))];

        let comparison = compare_with_benchmarks(&txns, &benchmarks);
        let line = &comparison.benchmarks[0];
        assert_eq!(line.values, vec![dec!(100), dec!(100)]);
        assert_eq!(line.return_pct, Some(dec!(0)));
    }

    #[test]
    fn test_zero_start_benchmark_stays_flat_and_reports_no_return() {
        let txns = vec![
            buy(1, date(2024, 1, 1), dec!(1), dec!(100)),
            buy(2, date(2024, 2, 1), dec!(1), dec!(100)),
        ];
        let benchmarks = vec![quote("BROKEN", dec!(0), dec!(100))];

        let comparison = compare_with_benchmarks(&txns, &benchmarks);
        let line = &comparison.benchmarks[0];
        assert_eq!(line.values, vec![dec!(100), dec!(100)]);
        assert_eq!(line.return_pct, None);

        let stats = comparison.stats.unwrap();
        // No benchmark return means no outperformance delta either
        assert_eq!(stats.outperformance[0].outperformance_pct, None);
    }

    #[test]
    fn test_empty_ledger_yields_empty_comparison() {
        let benchmarks = vec![quote("NIFTY 50", dec!(22000), dec!(24000))];
        let comparison = compare_with_benchmarks(&[], &benchmarks);

        assert!(comparison.growth.is_empty());
        assert!(comparison.benchmarks.is_empty());
        assert!(comparison.stats.is_none());
    }

    #[test]
    fn test_service_reads_from_source() {
        let source = Arc::new(MockTransactionSource {
            transactions: vec![
                buy(1, date(2024, 1, 1), dec!(1), dec!(100)),
                buy(2, date(2024, 2, 1), dec!(1), dec!(100)),
            ],
        });
        let service = PerformanceService::new(source);

        let comparison = service
            .compare_with_benchmarks(&[quote("NIFTY 50", dec!(100), dec!(110))])
            .unwrap();
        assert_eq!(comparison.growth.len(), 2);
        assert_eq!(comparison.benchmarks.len(), 1);
    }
}
