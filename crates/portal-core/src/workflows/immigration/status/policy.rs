use super::domain::{CurrentLocation, StatusResult, StatusState};

/// Below this many days before expiry an application should go in immediately.
pub const URGENT_WINDOW_DAYS: i64 = 30;
/// Below this many days before expiry the application should be in preparation.
pub const PREPARATION_WINDOW_DAYS: i64 = 90;
/// Days after expiry during which restoration can still be requested from inside Canada.
pub const RESTORATION_WINDOW_DAYS: i64 = 90;

pub(crate) fn decide_status(
    days_until_expiry: i64,
    has_submitted_extension: bool,
    location: CurrentLocation,
) -> StatusResult {
    if days_until_expiry >= 0 {
        if has_submitted_extension {
            maintained_before_expiry(days_until_expiry, location)
        } else {
            valid(days_until_expiry)
        }
    } else {
        let days_past = days_until_expiry.abs();
        if has_submitted_extension {
            maintained_after_expiry(location)
        } else if days_past <= RESTORATION_WINDOW_DAYS {
            restoration(days_past)
        } else {
            out_of_status()
        }
    }
}

fn valid(days_until_expiry: i64) -> StatusResult {
    let mut action_plan = Vec::new();
    let urgent_action_required = days_until_expiry < URGENT_WINDOW_DAYS;

    if urgent_action_required {
        action_plan.push(format!(
            "URGENT: apply for an extension immediately. The official guidance recommends applying at least {URGENT_WINDOW_DAYS} days before expiry, but the technical deadline is the expiry date itself."
        ));
    } else if days_until_expiry < PREPARATION_WINDOW_DAYS {
        action_plan.push(
            "Prepare your extension application now: gather documents and confirm your next permit pathway."
                .to_string(),
        );
    }

    StatusResult {
        status_state: StatusState::Valid,
        days_remaining: days_until_expiry,
        action_plan,
        legal_nuances: vec![bridging_strategy_note()],
        urgent_action_required,
    }
}

fn maintained_before_expiry(days_until_expiry: i64, location: CurrentLocation) -> StatusResult {
    StatusResult {
        status_state: StatusState::Maintained,
        days_remaining: days_until_expiry,
        action_plan: vec![
            "Your extension was filed before expiry: you may keep working under the conditions of your current permit until a decision is made.".to_string(),
            "Do not leave Canada: departing ends maintained status and the work authorization that comes with it.".to_string(),
        ],
        legal_nuances: maintained_nuances(location),
        urgent_action_required: false,
    }
}

fn maintained_after_expiry(location: CurrentLocation) -> StatusResult {
    StatusResult {
        status_state: StatusState::Maintained,
        days_remaining: 0,
        action_plan: vec![
            "You remain legally in Canada under maintained status while your application is pending.".to_string(),
            "Keep proof of your application receipt with you at all times.".to_string(),
        ],
        legal_nuances: maintained_nuances(location),
        urgent_action_required: false,
    }
}

fn restoration(days_past: i64) -> StatusResult {
    StatusResult {
        status_state: StatusState::RestorationPeriod,
        days_remaining: RESTORATION_WINDOW_DAYS - days_past,
        action_plan: vec![
            "You are out of status.".to_string(),
            "Stop working immediately.".to_string(),
            "File a restoration application together with a new permit application before the window closes.".to_string(),
        ],
        legal_nuances: vec![
            "Restoration is discretionary: you must explain why you stayed past your expiry date.".to_string(),
        ],
        urgent_action_required: true,
    }
}

fn out_of_status() -> StatusResult {
    StatusResult {
        status_state: StatusState::OutOfStatus,
        days_remaining: 0,
        action_plan: vec![
            format!("You are past the {RESTORATION_WINDOW_DAYS}-day restoration window and have no remedy available from inside Canada."),
            "You must leave Canada or face enforcement action.".to_string(),
        ],
        legal_nuances: vec![
            "A Temporary Resident Permit is the only exception, reserved for humanitarian cases; consult legal counsel.".to_string(),
        ],
        urgent_action_required: true,
    }
}

fn bridging_strategy_note() -> String {
    "Bridging strategy: if you do not have an employment pathway yet, consider applying for a visitor record before expiry to keep legal presence. Visitor status does not allow you to work.".to_string()
}

fn maintained_nuances(location: CurrentLocation) -> Vec<String> {
    match location {
        CurrentLocation::InsideCanada => Vec::new(),
        CurrentLocation::OutsideCanada => vec![
            "Maintained status only protects applicants who remain in Canada; re-entering requires a valid visa and does not restore work authorization.".to_string(),
        ],
    }
}
