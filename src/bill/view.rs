//! Renders the bills page and the receipt modal.

use maud::{Markup, html};

use crate::{
    bill::BillRow,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base, loading_spinner,
    },
    navigation::VerticalLayout,
    routing::RoutePath,
    session::Session,
};

/// What the bills page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum BillsViewState {
    /// The bills are being retrieved.
    Loading,
    /// The bills could not be retrieved, with the message to show the user.
    Error(String),
    /// The bills to list, in display order.
    Loaded(Vec<BillRow>),
}

/// The bills page, with the navigation for the user of `session`.
pub fn bills_view(state: &BillsViewState, session: &Session) -> Markup {
    let content = bills_content(state);

    base(
        "Mes notes de frais",
        &VerticalLayout::new(RoutePath::Bills, session).into_html(&content),
    )
}

/// The part of the bills page that changes with `state`.
///
/// The loading view asks for the bills as soon as it is shown and is replaced
/// by the response.
pub fn bills_content(state: &BillsViewState) -> Markup {
    match state {
        BillsViewState::Loading => loading_view(),
        BillsViewState::Error(message) => error_view(message),
        BillsViewState::Loaded(rows) => loaded_view(rows),
    }
}

fn loading_view() -> Markup {
    html! {
        div
            id="loading"
            data-testid="loading-message"
            class=(PAGE_CONTAINER_STYLE)
            hx-get=(endpoints::BILLS_API)
            hx-trigger="load"
            hx-swap="outerHTML"
            hx-sync="this:replace"
        {
            span { (loading_spinner()) "Loading..." }
        }
    }
}

fn error_view(message: &str) -> Markup {
    html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold mb-4" { "Erreur" }

            div
                data-testid="error-message"
                class="p-4 text-red-800 rounded-lg bg-red-50 dark:bg-gray-800 dark:text-red-400"
            {
                (message)
            }
        }
    }
}

fn loaded_view(rows: &[BillRow]) -> Markup {
    html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="flex justify-between flex-wrap items-end mb-4"
            {
                h1 class="text-xl font-bold" { "Mes notes de frais" }

                button
                    type="button"
                    data-testid="btn-new-bill"
                    class=(BUTTON_PRIMARY_STYLE)
                    hx-post=(endpoints::NEW_BILL_API)
                {
                    "Nouvelle note de frais"
                }
            }

            div id="data-table" class="overflow-x-auto rounded"
            {
                table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Nom" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Montant" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Statut" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                        }
                    }

                    tbody data-testid="tbody"
                    {
                        @for row in rows {
                            (bill_row(row))
                        }
                    }
                }
            }

            (receipt_modal(None))
        }
    }
}

fn bill_row(row: &BillRow) -> Markup {
    let file_url = row.file_url.as_deref().unwrap_or_default();
    let receipt_query = serde_json::json!({ "file_url": file_url }).to_string();

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (row.expense_type) }
            td class=(TABLE_CELL_STYLE) { (row.name) }
            td class=(TABLE_CELL_STYLE) { time datetime=(row.raw_date) { (row.date) } }
            td class=(TABLE_CELL_STYLE) { (row.amount) }
            td class=(TABLE_CELL_STYLE) { (row.status) }
            td class=(TABLE_CELL_STYLE)
            {
                div
                    data-testid="icon-eye"
                    class="cursor-pointer w-6 h-6 text-blue-600 dark:text-blue-500"
                    title="Voir le justificatif"
                    data-bill-url=(file_url)
                    hx-get=(endpoints::RECEIPT_API)
                    hx-vals=(receipt_query)
                    hx-target="#modaleFile"
                    hx-swap="outerHTML"
                {
                    (eye_icon())
                }
            }
        }
    }
}

/// The modal showing the receipt image at `file_url`.
///
/// The modal is hidden when there is no image to show.
pub fn receipt_modal(file_url: Option<&str>) -> Markup {
    let (class, aria_hidden) = match file_url {
        Some(_) => (
            "modal show fixed inset-0 z-50 flex items-center justify-center bg-gray-900/50",
            "false",
        ),
        None => ("modal hidden", "true"),
    };

    html! {
        div
            id="modaleFile"
            data-testid="modaleFile"
            class=(class)
            role="dialog"
            aria-hidden=(aria_hidden)
        {
            div class="relative w-full max-w-2xl rounded-lg bg-white shadow-sm dark:bg-gray-700"
            {
                div class="flex items-center justify-between p-4 border-b dark:border-gray-600"
                {
                    h5 class="text-lg font-semibold text-gray-900 dark:text-white" { "Justificatif" }

                    button
                        type="button"
                        aria-label="Fermer"
                        class="text-gray-400 hover:text-gray-900 dark:hover:text-white"
                        onclick="document.getElementById('modaleFile').classList.add('hidden')"
                    {
                        "×"
                    }
                }

                div class="p-4 flex justify-center"
                {
                    @if let Some(file_url) = file_url {
                        img src=(file_url) alt="Bill" class="max-h-[70vh]";
                    }
                }
            }
        }
    }
}

fn eye_icon() -> Markup {
    html! {
        svg
            aria-hidden="true"
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
        {
            path
                stroke="currentColor"
                stroke-width="2"
                d="M21 12c0 1.2-4.03 6-9 6s-9-4.8-9-6c0-1.2 4.03-6 9-6s9 4.8 9 6Z" {}
            path
                stroke="currentColor"
                stroke-width="2"
                d="M15 12a3 3 0 1 1-6 0 3 3 0 0 1 6 0Z" {}
        }
    }
}
