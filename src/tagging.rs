use crate::criteria::expand_criteria;
use crate::error::PolicyError;
use crate::policies::RetentionRule;
use crate::wire::{RetentionTag, TaggingCriteria};

pub const DEFAULT_TAG_NAME: &str = "Default";
pub const DEFAULT_TAG_PRIORITY: i64 = 99;

/// Rule names and tag names are compared case-insensitively; the wire format
/// links a retention rule to its tag by nothing else.
pub fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

fn retention_tag(name: &str) -> RetentionTag {
    RetentionTag {
        e_tag: None,
        id: Some(format!("{}_", name)),
        tag_name: name.to_string(),
    }
}

pub fn expand_tagging_criteria(rules: &[RetentionRule]) -> Result<Vec<TaggingCriteria>, PolicyError> {
    let mut tagging_criteria = vec![TaggingCriteria {
        criteria: None,
        is_default: true,
        tag_info: retention_tag(DEFAULT_TAG_NAME),
        tagging_priority: DEFAULT_TAG_PRIORITY,
    }];

    for rule in rules {
        let criteria = match rule.criteria.as_slice() {
            [c] => c,
            [] => {
                return Err(PolicyError::MissingCriteria {
                    rule: rule.name.clone(),
                })
            }
            _ => {
                return Err(PolicyError::MultipleCriteria {
                    rule: rule.name.clone(),
                })
            }
        };

        tagging_criteria.push(TaggingCriteria {
            criteria: Some(vec![expand_criteria(criteria)]),
            is_default: false,
            tag_info: retention_tag(&rule.name),
            tagging_priority: rule.priority,
        });
    }

    Ok(tagging_criteria)
}

pub fn find_tagging_criteria<'a>(
    tagging_criteria: &'a [TaggingCriteria],
    name: &str,
) -> Option<&'a TaggingCriteria> {
    tagging_criteria
        .iter()
        .find(|tc| names_match(&tc.tag_info.tag_name, name))
}

#[cfg(test)]
mod tests {
    use crate::policies::{Criteria, RetentionRule};
    use crate::tagging::{expand_tagging_criteria, find_tagging_criteria, names_match};
    use crate::wire::{AbsoluteMarker, DayOfWeek};

    fn rule(name: &str, priority: i64) -> RetentionRule {
        RetentionRule {
            name: name.to_string(),
            priority,
            criteria: vec![Criteria {
                absolute_criteria: Some(AbsoluteMarker::FirstOfWeek),
                ..Criteria::default()
            }],
            life_cycle: vec![],
        }
    }

    #[test]
    fn default_tag_comes_first() {
        let rules = vec![rule("Weekly", 20), rule("Monthly", 15)];
        let tagging = expand_tagging_criteria(&rules).unwrap();

        assert_eq!(tagging.len(), 3);

        assert!(tagging[0].is_default);
        assert_eq!(tagging[0].tagging_priority, 99);
        assert_eq!(tagging[0].tag_info.tag_name, "Default");
        assert_eq!(tagging[0].tag_info.id.as_deref(), Some("Default_"));
        assert_eq!(tagging[0].criteria, None);

        // input order, not priority order
        assert_eq!(tagging[1].tag_info.tag_name, "Weekly");
        assert_eq!(tagging[1].tag_info.id.as_deref(), Some("Weekly_"));
        assert_eq!(tagging[1].tagging_priority, 20);
        assert!(!tagging[1].is_default);
        assert_eq!(tagging[2].tag_info.tag_name, "Monthly");
        assert_eq!(tagging[2].tagging_priority, 15);
    }

    #[test]
    fn missing_criteria_is_an_error() {
        let mut r = rule("Weekly", 20);
        r.criteria.clear();

        let err = expand_tagging_criteria(&[r]).unwrap_err();
        assert!(err
            .to_string()
            .contains("criteria is a required field, cannot leave blank"));
    }

    #[test]
    fn second_criteria_block_is_an_error() {
        let mut r = rule("Weekly", 20);
        r.criteria.push(Criteria {
            days_of_week: vec![DayOfWeek::Monday],
            ..Criteria::default()
        });

        let err = expand_tagging_criteria(&[r]).unwrap_err();
        assert!(err.to_string().contains("at most one block"));
    }

    #[test]
    fn names_match_ignores_case() {
        let cases = Vec::from([
            ("Daily", "Daily", true),
            ("Daily", "daily", true),
            ("DAILY", "daily", true),
            ("Daily", "Daily2", false),
            ("Daily", "", false),
        ]);

        for (a, b, expected) in cases {
            assert_eq!(names_match(a, b), expected, "{} vs {}", a, b);
        }

        let tagging = expand_tagging_criteria(&[rule("Weekly", 20)]).unwrap();
        assert_eq!(
            find_tagging_criteria(&tagging, "weekly").map(|tc| tc.tagging_priority),
            Some(20)
        );
        assert!(find_tagging_criteria(&tagging, "monthly").is_none());
    }
}
