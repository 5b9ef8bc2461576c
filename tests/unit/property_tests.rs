#[cfg(test)]
mod tests_reservation_properties {
    use boxoffice_rs::prelude::*;
    use proptest::prelude::*;

    /// Accepts every save and never holds prior state; the properties here
    /// are about in-memory bookkeeping, not files.
    #[derive(Debug, Default)]
    struct NullStore;

    impl StateStore for NullStore {
        fn load_catalog(&self) -> Result<Option<CatalogSnapshot>, StoreError> {
            Ok(None)
        }

        fn load_history(&self) -> Result<Option<LedgerSnapshot>, StoreError> {
            Ok(None)
        }

        fn save_catalog(&self, _snapshot: &CatalogSnapshot) -> Result<(), StoreError> {
            Ok(())
        }

        fn save_history(&self, _snapshot: &LedgerSnapshot) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[derive(Debug, Clone)]
    enum Action {
        Book {
            customer: String,
            show: &'static str,
            tier: Tier,
        },
        Cancel {
            customer: String,
        },
    }

    fn customer_strategy() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["Alice", "Bob", "Carol", "dave", "EVE"]).prop_map(String::from)
    }

    fn action_strategy() -> impl Strategy<Value = Action> {
        prop_oneof![
            (
                customer_strategy(),
                prop::bool::ANY,
                prop::sample::select(Tier::ALL.to_vec())
            )
                .prop_map(|(customer, second, tier)| Action::Book {
                    customer,
                    show: if second { "Show2" } else { "Show1" },
                    tier,
                }),
            customer_strategy().prop_map(|customer| Action::Cancel { customer }),
        ]
    }

    fn live_bookings_for(office: &BoxOffice<NullStore>, show: &str) -> u64 {
        office
            .history()
            .iter()
            .filter(|booking| booking.show == show)
            .count() as u64
    }

    proptest! {
        #[test]
        fn seats_are_conserved_across_any_interleaving(
            actions in prop::collection::vec(action_strategy(), 0..64)
        ) {
            let mut office = BoxOffice::with_state(Catalog::seeded(), Ledger::new(), NullStore);
            let mut confirmed: u64 = 0;
            let mut cancelled: u64 = 0;

            for action in actions {
                match action {
                    Action::Book { customer, show, tier } => {
                        let outcome = office
                            .book(&customer, show, tier)
                            .expect("valid booking input never errors here");
                        if outcome.booking().is_some() {
                            confirmed += 1;
                        }
                    }
                    Action::Cancel { customer } => {
                        if office.cancel(&customer).is_ok() {
                            cancelled += 1;
                        }
                    }
                }

                for show in ["Show1", "Show2"] {
                    let available = office.availability()[show];
                    let capacity = office
                        .catalog()
                        .get(show)
                        .expect("seeded show never disappears")
                        .capacity();
                    prop_assert!(available <= capacity);
                    prop_assert_eq!(available + live_bookings_for(&office, show), capacity);
                }
                prop_assert_eq!(office.history().len() as u64, confirmed - cancelled);
            }
        }

        #[test]
        fn draining_a_show_always_ends_on_the_waiting_list(extra in 1u64..16) {
            let mut office = BoxOffice::with_state(Catalog::seeded(), Ledger::new(), NullStore);

            for _ in 0..8 {
                let outcome = office
                    .book("Bob", "Show2", Tier::Silver)
                    .expect("booking should succeed");
                prop_assert!(!outcome.is_waitlisted());
            }

            for _ in 0..extra {
                let outcome = office
                    .book("Bob", "Show2", Tier::Silver)
                    .expect("a sold-out show is not an error");
                prop_assert!(outcome.is_waitlisted());
                prop_assert_eq!(office.availability()["Show2"], 0);
            }
        }
    }
}
