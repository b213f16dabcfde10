use dioxus::prelude::*;
use shared_types::{Odontogram, ToothCondition, ALL_CONDITIONS};

/// FDI tooth numbers, one row per arch, in left-to-right display order.
/// Upper: quadrant 1 reversed then quadrant 2; lower: 4 reversed then 3.
pub fn fdi_rows() -> [Vec<u8>; 2] {
    let upper: Vec<u8> = (11..=18).rev().chain(21..=28).collect();
    let lower: Vec<u8> = (41..=48).rev().chain(31..=38).collect();
    [upper, lower]
}

/// Odontogram chart: 32 teeth colored by recorded condition.
///
/// Coloring is a pure condition → class lookup; in editable mode a click
/// reports the tooth number and the editor decides what to record.
#[component]
pub fn OdontogramChart(
    odontogram: Odontogram,
    #[props(default = true)] read_only: bool,
    #[props(default)] on_tooth_click: Option<EventHandler<u8>>,
) -> Element {
    let rows = fdi_rows();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./odontograma.css") }

        div { class: "odontogram",
            for row in rows.iter() {
                div { class: "odontogram-arch",
                    for number in row.iter() {
                        {
                            let number = *number;
                            let condition = odontogram.condition_of(number);
                            let class = format!("odontogram-tooth {}", condition.css_class());
                            let label = condition.label();
                            rsx! {
                                button {
                                    key: "{number}",
                                    class: "{class}",
                                    disabled: read_only,
                                    title: "{label}",
                                    onclick: move |_| {
                                        if let Some(handler) = &on_tooth_click {
                                            handler.call(number);
                                        }
                                    },
                                    "{number}"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "odontogram-legend",
                for condition in ALL_CONDITIONS.iter() {
                    {
                        let key = condition.as_str();
                        let swatch = format!("odontogram-swatch {}", condition.css_class());
                        let label = condition.label();
                        rsx! {
                            span { key: "{key}", class: "odontogram-legend-item",
                                span { class: "{swatch}" }
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Compact read-only summary: how many teeth carry each non-healthy
/// condition. Used on the patient history screen.
pub fn condition_counts(odontogram: &Odontogram) -> Vec<(ToothCondition, usize)> {
    ALL_CONDITIONS
        .iter()
        .filter(|condition| **condition != ToothCondition::Healthy)
        .map(|condition| {
            let count = odontogram
                .teeth
                .iter()
                .filter(|tooth| tooth.condition() == *condition)
                .count();
            (*condition, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ToothRecord;

    #[test]
    fn fdi_layout_covers_all_32_teeth() {
        let [upper, lower] = fdi_rows();
        assert_eq!(upper.len(), 16);
        assert_eq!(lower.len(), 16);
        // Display order: patient's upper-right quadrant first, mirrored.
        assert_eq!(upper.first(), Some(&18));
        assert_eq!(upper.last(), Some(&28));
        assert_eq!(lower.first(), Some(&48));
        assert_eq!(lower.last(), Some(&38));
    }

    #[test]
    fn condition_counts_skips_healthy_and_zero() {
        let odontogram = Odontogram {
            patient_id: 1,
            teeth: vec![
                ToothRecord { number: 16, condition: "caries".into(), notes: String::new() },
                ToothRecord { number: 26, condition: "caries".into(), notes: String::new() },
                ToothRecord { number: 11, condition: "crown".into(), notes: String::new() },
            ],
        };
        let counts = condition_counts(&odontogram);
        assert_eq!(
            counts,
            vec![(ToothCondition::Caries, 2), (ToothCondition::Crown, 1)]
        );
    }
}
