use dioxus::prelude::*;
use shared_types::{Odontogram, ToothCondition, ALL_CONDITIONS};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, Input,
    PageHeader, PageTitle, Skeleton,
};

use crate::services::patients;
use crate::views::components::odontograma::OdontogramChart;
use crate::views::components::ScreenMeta;

/// Odontogram editor: pick a patient, paint conditions tooth by tooth, save.
#[component]
pub fn DentistOdontogram(role: String, user_name: String, view: String) -> Element {
    let mut query = use_signal(String::new);
    let mut editing = use_signal(|| None::<Odontogram>);
    let mut patient_label = use_signal(String::new);
    let mut brush = use_signal(|| ToothCondition::Caries);
    let mut status_msg = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let results = use_resource(move || {
        let q = query.read().clone();
        async move { patients::search(&q).await }
    });

    let handle_save = move |_: MouseEvent| {
        let Some(current) = editing.read().clone() else {
            return;
        };
        saving.set(true);
        status_msg.set(None);
        spawn(async move {
            match patients::save_odontogram(&current).await {
                Ok(saved) => {
                    editing.set(Some(saved));
                    status_msg.set(Some("Odontograma guardado.".to_string()));
                }
                Err(err) => status_msg.set(Some(err.message)),
            }
            saving.set(false);
        });
    };

    let picker = match &*results.read() {
        Some(Ok(items)) => rsx! {
            Card {
                CardHeader {
                    CardTitle { "Elige un paciente" }
                }
                CardContent {
                    Input {
                        placeholder: "Buscar paciente...",
                        value: query(),
                        on_input: move |e: FormEvent| query.set(e.value()),
                    }
                    if items.is_empty() {
                        p { class: "empty-state", "Sin resultados." }
                    } else {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Nº" }
                                DataTableColumn { "Nombre" }
                            }
                            DataTableBody {
                                for patient in items.iter() {
                                    {
                                        let id = patient.id;
                                        let name = patient.full_name();
                                        let name_for_click = name.clone();
                                        rsx! {
                                            DataTableRow {
                                                key: "{id}",
                                                onclick: move |_| {
                                                    let name = name_for_click.clone();
                                                    spawn(async move {
                                                        status_msg.set(None);
                                                        match patients::odontogram(id).await {
                                                            Ok(odontogram) => {
                                                                patient_label.set(name.clone());
                                                                editing.set(Some(odontogram));
                                                            }
                                                            Err(err) => status_msg.set(Some(err.message)),
                                                        }
                                                    });
                                                },
                                                DataTableCell { "{id}" }
                                                DataTableCell { "{name}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
        Some(Err(err)) => rsx! {
            Card {
                CardContent {
                    p { class: "load-error", "{err.message}" }
                }
            }
        },
        None => rsx! {
            Card {
                CardContent {
                    Skeleton { style: "height: 6rem; width: 100%;" }
                }
            }
        },
    };

    let editor = match editing.read().clone() {
        Some(odontogram) => {
            let label = patient_label.read().clone();
            rsx! {
                Card {
                    CardHeader {
                        CardTitle { "Odontograma de {label}" }
                        CardDescription { "Haz clic en un diente para aplicar la condición elegida" }
                    }
                    CardContent {
                        div { class: "filter-bar",
                            label { class: "filter-label", "Condición" }
                            select {
                                class: "input",
                                onchange: move |e: Event<FormData>| {
                                    brush.set(ToothCondition::from_str_or_default(&e.value()));
                                },
                                for condition in ALL_CONDITIONS.iter() {
                                    {
                                        let value = condition.as_str();
                                        let text = condition.label();
                                        let selected = *condition == brush();
                                        rsx! {
                                            option { key: "{value}", value: "{value}", selected: selected, "{text}" }
                                        }
                                    }
                                }
                            }
                        }

                        OdontogramChart {
                            odontogram: odontogram.clone(),
                            read_only: false,
                            on_tooth_click: move |number: u8| {
                                let mut current = editing.read().clone();
                                if let Some(ref mut odo) = current {
                                    odo.set_condition(number, brush());
                                    editing.set(current);
                                }
                            },
                        }

                        if let Some(msg) = status_msg() {
                            p { class: "form-status", "{msg}" }
                        }

                        div { class: "record-actions",
                            Button {
                                variant: ButtonVariant::Primary,
                                disabled: saving(),
                                onclick: handle_save,
                                if saving() { "Guardando..." } else { "Guardar" }
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| editing.set(None),
                                "Cerrar"
                            }
                        }
                    }
                }
            }
        }
        None => rsx! {},
    };

    rsx! {
        PageHeader {
            PageTitle { "Odontograma" }
        }
        ScreenMeta { role, view, user_name }

        if editing.read().is_none() {
            {picker}
        }
        {editor}
    }
}
