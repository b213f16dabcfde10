use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use dioxus::prelude::*;
use shared_types::{Appointment, AppointmentStatus};

/// Bookable starting hours; the clinic closes 14:00–15:00 for lunch.
pub const DAY_SLOTS: &[&str] = &[
    "09:00", "10:00", "11:00", "12:00", "13:00", "15:00", "16:00", "17:00",
];

/// Monday of the week containing `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Monday through Saturday of the week starting at `monday`.
pub fn week_days(monday: NaiveDate) -> Vec<NaiveDate> {
    (0..6).map(|offset| monday + Duration::days(offset)).collect()
}

/// Index appointments by `(date, slot)`. Cancelled appointments do not
/// occupy their slot.
pub fn slot_map(appointments: &[Appointment]) -> HashMap<(String, String), Vec<Appointment>> {
    let mut map: HashMap<(String, String), Vec<Appointment>> = HashMap::new();
    for appointment in appointments {
        if appointment.status() == AppointmentStatus::Cancelled {
            continue;
        }
        map.entry((appointment.date.clone(), appointment.slot.clone()))
            .or_default()
            .push(appointment.clone());
    }
    map
}

const WEEKDAY_NAMES: [&str; 6] = ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"];

/// Weekly slot grid. A cell holding more than one appointment renders as a
/// double-booking conflict; this is display only, no booking rules live here.
#[component]
pub fn WeekCalendar(appointments: Vec<Appointment>, week_start: String) -> Element {
    let monday = match NaiveDate::parse_from_str(&week_start, "%Y-%m-%d") {
        Ok(date) => monday_of(date),
        Err(_) => {
            return rsx! {
                p { class: "week-calendar-error", "Semana inválida: {week_start}" }
            }
        }
    };
    let days = week_days(monday);
    let occupancy = slot_map(&appointments);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./calendario.css") }

        div { class: "week-calendar",
            table {
                thead {
                    tr {
                        th { "" }
                        for (idx , day) in days.iter().enumerate() {
                            th { key: "{day}", "{WEEKDAY_NAMES[idx]} {day.day()}" }
                        }
                    }
                }
                tbody {
                    for slot in DAY_SLOTS.iter() {
                        tr { key: "{slot}",
                            th { class: "week-calendar-slot", "{slot}" }
                            for day in days.iter() {
                                {
                                    let cell_key = (day.format("%Y-%m-%d").to_string(), slot.to_string());
                                    let booked = occupancy.get(&cell_key);
                                    let count = booked.map(|b| b.len()).unwrap_or(0);
                                    let class = match count {
                                        0 => "week-calendar-cell free",
                                        1 => "week-calendar-cell booked",
                                        _ => "week-calendar-cell conflict",
                                    };
                                    rsx! {
                                        td { key: "{day}-{slot}", class: "{class}",
                                            match booked {
                                                Some(_) if count > 1 => rsx! {
                                                    span { "{count} citas" }
                                                },
                                                Some(cell) => rsx! {
                                                    span { "{cell[0].patient_name}" }
                                                },
                                                None => rsx! {
                                                    span { class: "week-calendar-free", "—" }
                                                },
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appt(id: i64, date: &str, slot: &str, status: &str) -> Appointment {
        Appointment {
            id,
            patient_id: id,
            patient_name: format!("Paciente {id}"),
            dentist_id: 1,
            dentist_name: "Maria Lopez".into(),
            date: date.into(),
            slot: slot.into(),
            status: status.into(),
            reason: String::new(),
        }
    }

    #[test]
    fn monday_of_any_weekday() {
        // 2026-08-06 is a Thursday.
        let thursday = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let monday = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        assert_eq!(monday_of(thursday), monday);
        assert_eq!(monday_of(monday), monday);
    }

    #[test]
    fn week_days_are_monday_through_saturday() {
        let monday = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        let days = week_days(monday);
        assert_eq!(days.len(), 6);
        assert_eq!(days[0], monday);
        assert_eq!(days[5], NaiveDate::from_ymd_opt(2026, 8, 8).unwrap());
    }

    #[test]
    fn slot_map_detects_double_booking() {
        let appointments = vec![
            appt(1, "2026-08-03", "09:00", "scheduled"),
            appt(2, "2026-08-03", "09:00", "confirmed"),
            appt(3, "2026-08-03", "10:00", "scheduled"),
        ];
        let map = slot_map(&appointments);
        let conflict = map
            .get(&("2026-08-03".to_string(), "09:00".to_string()))
            .unwrap();
        assert_eq!(conflict.len(), 2);
        let single = map
            .get(&("2026-08-03".to_string(), "10:00".to_string()))
            .unwrap();
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn slot_map_ignores_cancelled() {
        let appointments = vec![
            appt(1, "2026-08-03", "09:00", "cancelled"),
            appt(2, "2026-08-03", "09:00", "scheduled"),
        ];
        let map = slot_map(&appointments);
        let cell = map
            .get(&("2026-08-03".to_string(), "09:00".to_string()))
            .unwrap();
        assert_eq!(cell.len(), 1);
        assert_eq!(cell[0].id, 2);
    }
}
