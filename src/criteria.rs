use crate::policies::Criteria;
use crate::wire::{BackupCriteria, ScheduleBasedBackupCriteria};

/// An absolute marker takes over the whole criteria: the weekly, monthly and
/// time fields are left out even if the input sets them.
pub fn expand_criteria(criteria: &Criteria) -> BackupCriteria {
    if let Some(marker) = criteria.absolute_criteria {
        return BackupCriteria::ScheduleBasedBackupCriteria(ScheduleBasedBackupCriteria {
            absolute_criteria: Some(vec![marker]),
            ..ScheduleBasedBackupCriteria::default()
        });
    }

    BackupCriteria::ScheduleBasedBackupCriteria(ScheduleBasedBackupCriteria {
        absolute_criteria: None,
        days_of_month: None,
        days_of_the_week: Some(criteria.days_of_week.clone()),
        months_of_year: Some(criteria.months_of_year.clone()),
        schedule_times: Some(criteria.scheduled_backup_times.clone()),
        weeks_of_the_month: Some(criteria.weeks_of_month.clone()),
    })
}

pub fn flatten_criteria(criteria: &BackupCriteria) -> Criteria {
    match criteria {
        BackupCriteria::ScheduleBasedBackupCriteria(c) => Criteria {
            absolute_criteria: c
                .absolute_criteria
                .as_ref()
                .and_then(|markers| markers.first().copied()),
            days_of_week: c.days_of_the_week.clone().unwrap_or_default(),
            months_of_year: c.months_of_year.clone().unwrap_or_default(),
            weeks_of_month: c.weeks_of_the_month.clone().unwrap_or_default(),
            scheduled_backup_times: c.schedule_times.clone().unwrap_or_default(),
        },
        BackupCriteria::Unknown => Criteria::default(),
    }
}
