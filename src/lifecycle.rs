use crate::policies::LifeCycle;
use crate::wire::{DataStoreInfoBase, DeleteOption, SourceLifeCycle};

pub fn expand_life_cycles(life_cycles: &[LifeCycle]) -> Vec<SourceLifeCycle> {
    life_cycles
        .iter()
        .map(|lc| SourceLifeCycle {
            delete_after: DeleteOption::AbsoluteDeleteOption {
                duration: lc.duration.clone(),
            },
            source_data_store: DataStoreInfoBase::new(lc.data_store_type.clone()),
            target_data_store_copy_settings: Some(Vec::new()),
        })
        .collect()
}

/// Only absolute delete options carry a duration; anything else flattens to an
/// empty one.
pub fn flatten_life_cycles(life_cycles: &[SourceLifeCycle]) -> Vec<LifeCycle> {
    life_cycles
        .iter()
        .map(|lc| {
            let duration = match &lc.delete_after {
                DeleteOption::AbsoluteDeleteOption { duration } => duration.clone(),
                DeleteOption::Unknown => String::new(),
            };
            LifeCycle {
                duration,
                data_store_type: lc.source_data_store.data_store_type.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::lifecycle::{expand_life_cycles, flatten_life_cycles};
    use crate::policies::LifeCycle;
    use crate::wire::{DataStoreType, SourceLifeCycle};

    #[test]
    fn expand_wire_shape() {
        let life_cycles = vec![
            LifeCycle {
                duration: "P7D".to_string(),
                data_store_type: DataStoreType::VaultStore,
            },
            LifeCycle {
                duration: "P1Y".to_string(),
                data_store_type: DataStoreType::ArchiveStore,
            },
        ];

        let value = serde_json::to_value(expand_life_cycles(&life_cycles)).unwrap();
        assert_eq!(
            value,
            json!([
                {
                    "deleteAfter": {"objectType": "AbsoluteDeleteOption", "duration": "P7D"},
                    "sourceDataStore": {"dataStoreType": "VaultStore", "objectType": "DataStoreInfoBase"},
                    "targetDataStoreCopySettings": []
                },
                {
                    "deleteAfter": {"objectType": "AbsoluteDeleteOption", "duration": "P1Y"},
                    "sourceDataStore": {"dataStoreType": "ArchiveStore", "objectType": "DataStoreInfoBase"},
                    "targetDataStoreCopySettings": []
                }
            ])
        );

        assert_eq!(
            flatten_life_cycles(&expand_life_cycles(&life_cycles)),
            life_cycles
        );
    }

    #[test]
    fn unknown_delete_option_keeps_data_store() {
        let wire: Vec<SourceLifeCycle> = serde_json::from_value(json!([{
            "deleteAfter": {"objectType": "RelativeDeleteOption", "days": 3},
            "sourceDataStore": {"dataStoreType": "OperationalStore", "objectType": "DataStoreInfoBase"}
        }]))
        .unwrap();

        assert_eq!(
            flatten_life_cycles(&wire),
            vec![LifeCycle {
                duration: String::new(),
                data_store_type: DataStoreType::OperationalStore,
            }]
        );
    }
}
