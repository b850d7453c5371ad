use bullion_tracker_core::models::commodity::{Commodity, CHI_PER_CAY, KG_PER_LUONG};
use bullion_tracker_core::models::ledger::Ledger;
use bullion_tracker_core::models::snapshot::StoreSnapshot;
use bullion_tracker_core::models::state::TrackerState;
use bullion_tracker_core::models::summary::ProfitState;
use bullion_tracker_core::models::transaction::Transaction;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ═══════════════════════════════════════════════════════════════════
//  Commodity
// ═══════════════════════════════════════════════════════════════════

mod commodity {
    use super::*;

    #[test]
    fn display_gold() {
        assert_eq!(Commodity::Gold.to_string(), "Gold");
    }

    #[test]
    fn display_silver() {
        assert_eq!(Commodity::Silver.to_string(), "Silver");
    }

    #[test]
    fn all_lists_both() {
        assert_eq!(Commodity::ALL, [Commodity::Gold, Commodity::Silver]);
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Commodity::Gold).unwrap(), "\"gold\"");
        assert_eq!(
            serde_json::to_string(&Commodity::Silver).unwrap(),
            "\"silver\""
        );
    }

    #[test]
    fn serde_roundtrip() {
        for c in Commodity::ALL {
            let json = serde_json::to_string(&c).unwrap();
            let back: Commodity = serde_json::from_str(&json).unwrap();
            assert_eq!(c, back);
        }
    }

    #[test]
    fn default_sell_prices_are_seeds() {
        assert!(approx(Commodity::Gold.default_sell_price(), 14.5));
        assert!(approx(Commodity::Silver.default_sell_price(), 0.5));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  UnitTable
// ═══════════════════════════════════════════════════════════════════

mod unit_table {
    use super::*;

    // ── Gold ──────────────────────────────────────────────────────

    #[test]
    fn gold_base_unit_is_chi() {
        assert_eq!(Commodity::Gold.units().base_unit, "chi");
        assert_eq!(Commodity::Gold.units().bulk_unit, "cay");
    }

    #[test]
    fn gold_chi_is_identity() {
        assert!(approx(Commodity::Gold.units().factor("chi"), 1.0));
    }

    #[test]
    fn gold_cay_is_ten_chi() {
        assert!(approx(Commodity::Gold.units().factor("cay"), CHI_PER_CAY));
        assert!(approx(Commodity::Gold.units().to_base(1.0, "cay"), 10.0));
    }

    #[test]
    fn gold_diacritic_spellings_recognized() {
        let units = Commodity::Gold.units();
        assert!(approx(units.factor("chỉ"), 1.0));
        assert!(approx(units.factor("cây"), 10.0));
    }

    // ── Silver ────────────────────────────────────────────────────

    #[test]
    fn silver_base_unit_is_kg() {
        assert_eq!(Commodity::Silver.units().base_unit, "kg");
        assert_eq!(Commodity::Silver.units().bulk_unit, "luong");
    }

    #[test]
    fn silver_kg_is_identity() {
        assert!(approx(Commodity::Silver.units().factor("kg"), 1.0));
    }

    #[test]
    fn silver_luong_converts() {
        let units = Commodity::Silver.units();
        assert!(approx(units.factor("luong"), KG_PER_LUONG));
        assert!(approx(units.to_base(2.0, "luong"), 0.075));
        assert!(approx(units.factor("lượng"), KG_PER_LUONG));
    }

    // ── Fail-soft behavior ────────────────────────────────────────

    #[test]
    fn unrecognized_unit_is_identity() {
        assert!(approx(Commodity::Gold.units().to_base(3.5, "oz"), 3.5));
        assert!(approx(Commodity::Silver.units().to_base(2.0, "gram"), 2.0));
    }

    #[test]
    fn empty_unit_is_identity() {
        assert!(approx(Commodity::Gold.units().to_base(7.0, ""), 7.0));
    }

    #[test]
    fn matching_ignores_case_and_whitespace() {
        let units = Commodity::Gold.units();
        assert!(approx(units.factor("CAY"), 10.0));
        assert!(approx(units.factor("  chi "), 1.0));
    }

    #[test]
    fn recognizes_known_and_rejects_unknown() {
        let units = Commodity::Gold.units();
        assert!(units.recognizes("cay"));
        assert!(units.recognizes("Chi"));
        assert!(!units.recognizes("oz"));
    }

    // ── Round-trip law ────────────────────────────────────────────

    #[test]
    fn gold_round_trip() {
        let units = Commodity::Gold.units();
        let base = units.to_base(1.0, "cay");
        assert!(approx(base, 10.0));
        assert!(approx(units.to_bulk(base), 1.0));
    }

    #[test]
    fn silver_round_trip() {
        let units = Commodity::Silver.units();
        let base = units.to_base(2.0, "luong");
        assert!(approx(base, 0.075));
        assert!(approx(units.to_bulk(base), 2.0));
    }

    #[test]
    fn round_trip_arbitrary_quantities() {
        for c in Commodity::ALL {
            let units = c.units();
            for qty in [0.0, 0.1, 1.0, 2.5, 1000.0] {
                let back = units.to_bulk(units.to_base(qty, units.bulk_unit));
                assert!(approx(back, qty), "{c}: {qty} round-tripped to {back}");
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Transaction
// ═══════════════════════════════════════════════════════════════════

mod transaction {
    use super::*;

    #[test]
    fn new_row_defaults() {
        let tx = Transaction::new(7, Commodity::Gold);
        assert_eq!(tx.id, 7);
        assert!(approx(tx.qty, 1.0));
        assert_eq!(tx.unit, "chi");
        assert!(approx(tx.buy_price, 0.0));
    }

    #[test]
    fn new_row_uses_commodity_base_unit() {
        let tx = Transaction::new(0, Commodity::Silver);
        assert_eq!(tx.unit, "kg");
    }

    #[test]
    fn with_values() {
        let tx = Transaction::with_values(3, 2.0, "cay", 10.85);
        assert_eq!(tx.id, 3);
        assert!(approx(tx.qty, 2.0));
        assert_eq!(tx.unit, "cay");
        assert!(approx(tx.buy_price, 10.85));
    }

    #[test]
    fn serializes_camel_case() {
        let tx = Transaction::with_values(1, 2.0, "cay", 10.5);
        let json = serde_json::to_string(&tx).unwrap();
        assert!(json.contains("\"buyPrice\""));
        assert!(!json.contains("buy_price"));
    }

    #[test]
    fn deserializes_wire_shape() {
        let tx: Transaction =
            serde_json::from_str(r#"{"id":4,"qty":1.5,"unit":"cay","buyPrice":11.2}"#).unwrap();
        assert_eq!(tx.id, 4);
        assert!(approx(tx.qty, 1.5));
        assert_eq!(tx.unit, "cay");
        assert!(approx(tx.buy_price, 11.2));
    }

    #[test]
    fn missing_fields_default() {
        let tx: Transaction = serde_json::from_str(r#"{"id":9}"#).unwrap();
        assert_eq!(tx.id, 9);
        assert!(approx(tx.qty, 0.0));
        assert_eq!(tx.unit, "");
        assert!(approx(tx.buy_price, 0.0));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Ledger
// ═══════════════════════════════════════════════════════════════════

mod ledger {
    use super::*;

    #[test]
    fn new_is_empty_at_seed_price() {
        let ledger = Ledger::new(Commodity::Gold);
        assert!(ledger.is_empty());
        assert_eq!(ledger.id_counter, 0);
        assert!(approx(ledger.sell_price, 14.5));
    }

    #[test]
    fn next_id_is_monotonic() {
        let mut ledger = Ledger::new(Commodity::Gold);
        assert_eq!(ledger.next_id(), 0);
        assert_eq!(ledger.next_id(), 1);
        assert_eq!(ledger.next_id(), 2);
    }

    #[test]
    fn sample_gold_rows() {
        let ledger = Ledger::sample(Commodity::Gold);
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.id_counter, 3);
        let ids: Vec<u64> = ledger.transactions.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(ledger.transactions[0].unit, "cay");
        assert!(approx(ledger.transactions[1].buy_price, 10.850));
    }

    #[test]
    fn sample_silver_rows() {
        let ledger = Ledger::sample(Commodity::Silver);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.transactions[0].unit, "kg");
        assert_eq!(ledger.transactions[1].unit, "luong");
    }

    #[test]
    fn resync_counter_with_gaps() {
        let mut ledger = Ledger::new(Commodity::Gold);
        ledger.transactions = vec![
            Transaction::with_values(2, 1.0, "chi", 1.0),
            Transaction::with_values(17, 1.0, "chi", 1.0),
            Transaction::with_values(5, 1.0, "chi", 1.0),
        ];
        ledger.resync_id_counter();
        assert_eq!(ledger.id_counter, 18);
    }

    #[test]
    fn resync_counter_out_of_order() {
        let mut ledger = Ledger::new(Commodity::Silver);
        ledger.transactions = vec![
            Transaction::with_values(9, 1.0, "kg", 1.0),
            Transaction::with_values(0, 1.0, "kg", 1.0),
        ];
        ledger.resync_id_counter();
        assert_eq!(ledger.id_counter, 10);
    }

    #[test]
    fn resync_counter_empty_is_zero() {
        let mut ledger = Ledger::new(Commodity::Gold);
        ledger.id_counter = 42;
        ledger.transactions.clear();
        ledger.resync_id_counter();
        assert_eq!(ledger.id_counter, 0);
    }

    #[test]
    fn lookup_by_id() {
        let ledger = Ledger::sample(Commodity::Gold);
        assert!(ledger.transaction(1).is_some());
        assert!(ledger.transaction(99).is_none());
    }

    #[test]
    fn id_counter_not_serialized() {
        let ledger = Ledger::sample(Commodity::Gold);
        let json = serde_json::to_string(&ledger).unwrap();
        assert!(!json.contains("id_counter"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  StoreSnapshot
// ═══════════════════════════════════════════════════════════════════

mod snapshot {
    use super::*;

    #[test]
    fn empty_has_seed_prices() {
        let snapshot = StoreSnapshot::empty();
        assert!(snapshot.transactions.is_empty());
        assert!(snapshot.silver_transactions.is_empty());
        assert!(approx(snapshot.sell_price, 14.5));
        assert!(approx(snapshot.silver_sell_price, 0.5));
        assert!(snapshot.last_updated.is_none());
    }

    #[test]
    fn wire_field_names() {
        let mut snapshot = StoreSnapshot::empty();
        snapshot
            .transactions
            .push(Transaction::with_values(0, 1.0, "cay", 10.7));
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"transactions\""));
        assert!(json.contains("\"sellPrice\""));
        assert!(json.contains("\"silverTransactions\""));
        assert!(json.contains("\"silverSellPrice\""));
        assert!(json.contains("\"buyPrice\""));
    }

    #[test]
    fn last_updated_omitted_when_none() {
        let json = serde_json::to_string(&StoreSnapshot::empty()).unwrap();
        assert!(!json.contains("lastUpdated"));
    }

    #[test]
    fn legacy_gold_only_payload_decodes() {
        // Shape written before the silver ledger existed
        let raw = r#"{
            "transactions": [{"id":0,"qty":1,"unit":"cay","buyPrice":10.71}],
            "sellPrice": 13.2
        }"#;
        let snapshot: StoreSnapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.transactions.len(), 1);
        assert!(approx(snapshot.sell_price, 13.2));
        assert!(snapshot.silver_transactions.is_empty());
        assert!(approx(snapshot.silver_sell_price, 0.5));
    }

    #[test]
    fn empty_object_decodes_to_defaults() {
        let snapshot: StoreSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, StoreSnapshot::empty());
    }

    #[test]
    fn full_roundtrip() {
        let mut snapshot = StoreSnapshot::empty();
        snapshot
            .transactions
            .push(Transaction::with_values(3, 2.0, "cay", 10.85));
        snapshot
            .silver_transactions
            .push(Transaction::with_values(0, 1.0, "kg", 0.45));
        snapshot.sell_price = 15.0;
        snapshot.silver_sell_price = 0.52;

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: StoreSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  TrackerState
// ═══════════════════════════════════════════════════════════════════

mod state {
    use super::*;

    #[test]
    fn default_seeds_both_ledgers() {
        let state = TrackerState::new();
        assert!(approx(state.ledger(Commodity::Gold).sell_price, 14.5));
        assert!(approx(state.ledger(Commodity::Silver).sell_price, 0.5));
    }

    #[test]
    fn ledger_accessors_route_by_commodity() {
        let mut state = TrackerState::new();
        state.ledger_mut(Commodity::Gold).sell_price = 16.0;
        assert!(approx(state.gold.sell_price, 16.0));
        assert!(approx(state.ledger(Commodity::Silver).sell_price, 0.5));
    }

    #[test]
    fn snapshot_roundtrip() {
        let mut state = TrackerState::new();
        state.gold = Ledger::sample(Commodity::Gold);
        state.silver = Ledger::sample(Commodity::Silver);
        state.gold.sell_price = 14.8;

        let snapshot = state.to_snapshot();
        let mut restored = TrackerState::new();
        restored.apply_snapshot(snapshot);

        assert_eq!(restored.gold.transactions, state.gold.transactions);
        assert_eq!(restored.silver.transactions, state.silver.transactions);
        assert!(approx(restored.gold.sell_price, 14.8));
    }

    #[test]
    fn apply_snapshot_resyncs_counters() {
        let mut snapshot = StoreSnapshot::empty();
        snapshot
            .transactions
            .push(Transaction::with_values(12, 1.0, "cay", 10.0));
        snapshot
            .silver_transactions
            .push(Transaction::with_values(4, 1.0, "kg", 0.4));

        let mut state = TrackerState::new();
        state.apply_snapshot(snapshot);
        assert_eq!(state.gold.id_counter, 13);
        assert_eq!(state.silver.id_counter, 5);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ProfitState
// ═══════════════════════════════════════════════════════════════════

mod profit_state {
    use super::*;

    #[test]
    fn positive_is_gain() {
        assert_eq!(ProfitState::classify(0.0001), ProfitState::Gain);
    }

    #[test]
    fn negative_is_loss() {
        assert_eq!(ProfitState::classify(-0.0001), ProfitState::Loss);
    }

    #[test]
    fn zero_is_break_even_not_gain() {
        assert_eq!(ProfitState::classify(0.0), ProfitState::BreakEven);
    }

    #[test]
    fn display_strings() {
        assert_eq!(ProfitState::Gain.to_string(), "gain");
        assert_eq!(ProfitState::Loss.to_string(), "loss");
        assert_eq!(ProfitState::BreakEven.to_string(), "break-even");
    }

    #[test]
    fn serde_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ProfitState::BreakEven).unwrap(),
            "\"break-even\""
        );
    }
}
