use super::footer::Footer;
use super::Titlebar;
use crate::config::Settings;
use crate::content::{Block, LegalDocument, TERMS};
use crate::date::current_date;
use leptos::*;

#[component]
pub fn View() -> impl IntoView {
    let locale = use_context::<Settings>().unwrap_or_default().date_locale;
    let last_updated = current_date(locale);
    log::debug!("rendering legal page, last updated {}", last_updated);

    view! {
        <Titlebar current_page="legal"/>
        <div class="main-container mg">
            <div class="text-content-row">
                <Document document={&TERMS} last_updated/>
            </div>
            <Footer/>
        </div>
    }
}

/// The legal text itself, without site chrome.
#[component]
pub fn Document(
    document: &'static LegalDocument,
    #[prop(into)] last_updated: String,
) -> impl IntoView {
    let sections = document
        .sections
        .iter()
        .map(|section| {
            view! {
                <section class="legal-section" id={section.id}>
                    <h2>{section.heading}</h2>
                    {section.blocks.iter().map(render_block).collect_view()}
                </section>
            }
        })
        .collect_view();
    let footnote = document.footnote;

    view! {
        <article class="text-content legal">
            <h1>{document.title}</h1>
            <p class="last-updated">"Last updated: " {last_updated}</p>
            {sections}
            <p class="footnote">
                {footnote.lead}
                " "
                <a href={footnote.href} target="_blank" rel="noopener noreferrer">
                    {footnote.link_text}
                </a>
                "."
            </p>
        </article>
    }
}

fn render_block(block: &Block) -> View {
    match *block {
        Block::Paragraph(text) => view! { <p>{text}</p> }.into_view(),
        Block::List(items) => view! {
            <ul>
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        }
        .into_view(),
        Block::Contact { prompt, email } => view! {
            <p class="contact">
                {prompt}
                " "
                <span class="email">{email}</span>
            </p>
        }
        .into_view(),
    }
}
