//! Plain-text views of loaded pages. Every optional field is rendered only
//! when present.

use crate::app::contact::CONTACT_CHANNELS;
use crate::core::facet::Facet;
use crate::core::pages::{HomeView, PageState, PortfolioView};
use crate::core::router::{Route, Router};
use crate::core::site::{Page, StaticPage};
use crate::domain::model::{BlogPost, PortfolioProject, Service};
use chrono::{DateTime, Utc};
use std::fmt::Write;

const UNTITLED: &str = "(untitled)";

pub fn render_page(page: &Page, router: &Router) -> String {
    let mut out = String::new();
    match page {
        Page::Home { state } => render_state(&mut out, "CODEJINX", state, |out, home| home_body(out, home, router)),
        Page::Services { state } => render_state(&mut out, "Our Services", state, |out, services| {
            for service in services {
                service_summary(out, service, router);
            }
        }),
        Page::ServiceDetail { state } => {
            render_state(&mut out, "Service", state, |out, service| service_detail(out, service))
        }
        Page::Portfolio { state } => {
            render_state(&mut out, "Our Portfolio", state, |out, view| portfolio_body(out, view, router))
        }
        Page::ProjectDetail { state } => {
            render_state(&mut out, "Project", state, |out, project| project_detail(out, project))
        }
        Page::Blog { state } => render_state(&mut out, "Our Blog", state, |out, posts| {
            for post in posts {
                post_summary(out, post, router);
            }
        }),
        Page::BlogPost { state } => render_state(&mut out, "Blog", state, |out, post| post_detail(out, post)),
        Page::Static { page } => static_page(&mut out, page),
    }
    out
}

fn render_state<T>(out: &mut String, heading: &str, state: &PageState<T>, body: impl FnOnce(&mut String, &T)) {
    match state {
        PageState::Ready(data) => body(out, data),
        PageState::Empty => {
            line(out, heading);
            line(out, "");
            line(out, "No content available yet. Check back soon!");
        }
        PageState::NotFound => {
            line(out, heading);
            line(out, "");
            line(out, "We couldn't find what you were looking for.");
        }
        PageState::FetchFailed { message, retryable } => {
            line(out, heading);
            line(out, "");
            line(out, message);
            if *retryable {
                line(out, "Please try again in a moment.");
            }
        }
    }
}

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn field(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        let _ = writeln!(out, "{}: {}", label, value);
    }
}

fn date(value: Option<&DateTime<Utc>>) -> Option<String> {
    value.map(|d| d.format("%B %-d, %Y").to_string())
}

fn home_body(out: &mut String, home: &HomeView, router: &Router) {
    line(out, "CODEJINX");
    line(out, "");
    line(out, "OUR SERVICES");
    for service in &home.services {
        service_summary(out, service, router);
    }
    line(out, "");
    line(out, "SELECTED WORKS");
    for project in &home.featured_projects {
        project_summary(out, project, router);
    }
    line(out, "");
    let _ = writeln!(out, "READY TO DISRUPT? {}", router.href(&Route::Contact));
}

fn service_summary(out: &mut String, service: &Service, router: &Router) {
    let _ = writeln!(
        out,
        "* {} <{}>",
        service.service_name.as_deref().unwrap_or(UNTITLED),
        router.href(&Route::ServiceDetail(service.id.clone()))
    );
    if let Some(short) = service.short_description.as_deref() {
        let _ = writeln!(out, "  {}", short);
    }
}

fn service_detail(out: &mut String, service: &Service) {
    line(out, service.service_name.as_deref().unwrap_or(UNTITLED));
    line(out, "");
    field(out, "Summary", service.short_description.as_deref());
    field(out, "Details", service.detailed_description.as_deref());
    field(out, "Industry context", service.industry_context.as_deref());
    field(out, "Transferable skills", service.transferable_skills.as_deref());
    field(out, "Image", service.service_image.as_deref());
    field(out, "Get started", service.call_to_action_url.as_deref());
}

fn project_summary(out: &mut String, project: &PortfolioProject, router: &Router) {
    let _ = writeln!(
        out,
        "* {} <{}>",
        project.project_name.as_deref().unwrap_or(UNTITLED),
        router.href(&Route::ProjectDetail(project.id.clone()))
    );
    let tags: Vec<&str> = Facet::ALL_FACETS
        .iter()
        .filter_map(|f| f.value_of(project))
        .filter(|v| !v.is_empty())
        .collect();
    if !tags.is_empty() {
        let _ = writeln!(out, "  [{}]", tags.join(" / "));
    }
    if let Some(completed) = date(project.completion_date.as_ref()) {
        let _ = writeln!(out, "  Completed: {}", completed);
    }
}

fn portfolio_body(out: &mut String, view: &PortfolioView, router: &Router) {
    line(out, "Our Portfolio");
    line(out, "");
    line(out, "Filter Projects");
    for facet in Facet::ALL_FACETS {
        let _ = writeln!(
            out,
            "  {} ({}): {}",
            facet.label(),
            view.selection.choice(facet).as_str(),
            view.options.for_facet(facet).join(", ")
        );
    }
    line(out, "");

    if view.projects.is_empty() {
        line(out, "No projects found matching your filters.");
        return;
    }
    if view.selection.is_unfiltered() {
        let _ = writeln!(out, "Showing all {} projects", view.total);
    } else {
        let _ = writeln!(out, "Showing {} of {} projects", view.projects.len(), view.total);
    }
    for project in &view.projects {
        project_summary(out, project, router);
    }
}

fn project_detail(out: &mut String, project: &PortfolioProject) {
    line(out, project.project_name.as_deref().unwrap_or(UNTITLED));
    line(out, "");
    field(out, "Discipline", project.discipline.as_deref());
    field(out, "Service type", project.service_type.as_deref());
    field(out, "Skill category", project.skill_category.as_deref());
    field(out, "Completed", date(project.completion_date.as_ref()).as_deref());
    field(out, "Description", project.project_description.as_deref());
    field(out, "Specialized terminology", project.specialized_terminology.as_deref());
    field(out, "Skill highlights", project.skill_highlights.as_deref());
    field(out, "Thumbnail", project.thumbnail_image.as_deref());
    field(out, "View project", project.project_url.as_deref());
}

fn post_summary(out: &mut String, post: &BlogPost, router: &Router) {
    let _ = writeln!(
        out,
        "* {} <{}>",
        post.title.as_deref().unwrap_or(UNTITLED),
        router.href(&Route::BlogPost(post.route_token().to_string()))
    );
    let byline: Vec<String> = [post.author.clone(), date(post.publication_date.as_ref())]
        .into_iter()
        .flatten()
        .collect();
    if !byline.is_empty() {
        let _ = writeln!(out, "  {}", byline.join(" · "));
    }
    if let Some(excerpt) = post.excerpt.as_deref() {
        let _ = writeln!(out, "  {}", excerpt);
    }
}

fn post_detail(out: &mut String, post: &BlogPost) {
    line(out, post.title.as_deref().unwrap_or(UNTITLED));
    field(out, "By", post.author.as_deref());
    field(out, "Published", date(post.publication_date.as_ref()).as_deref());
    field(out, "Image", post.featured_image.as_deref());
    line(out, "");
    if let Some(excerpt) = post.excerpt.as_deref() {
        line(out, excerpt);
        line(out, "");
    }
    for paragraph in post.paragraphs() {
        line(out, paragraph);
        line(out, "");
    }
    field(out, "Summary", post.seo_description.as_deref());
}

fn static_page(out: &mut String, page: &StaticPage) {
    line(out, page.title);
    if let Some(updated) = page.last_updated {
        let _ = writeln!(out, "Last updated: {}", updated);
    }
    line(out, "");
    for section in page.sections {
        let _ = writeln!(out, "## {}", section);
    }
    if page.title == crate::core::site::CONTACT.title {
        line(out, "");
        for channel in CONTACT_CHANNELS {
            match channel.link {
                Some(link) => {
                    let _ = writeln!(out, "{}: {} <{}>", channel.title, channel.value, link);
                }
                None => {
                    let _ = writeln!(out, "{}: {}", channel.title, channel.value);
                }
            }
        }
    }
}
