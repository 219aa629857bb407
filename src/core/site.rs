use crate::app::{ContactDesk, StudySimplifier};
use crate::core::crud::CrudClient;
use crate::core::facet::FacetSelection;
use crate::core::pages::{self, HomeLimits, HomeView, PageState, PortfolioView};
use crate::core::router::{Route, Router};
use crate::domain::model::{BlogPost, PortfolioProject, Service};
use crate::domain::ports::ContentStore;
use serde::Serialize;
use std::sync::Arc;

/// 不需要資料的頁面
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticPage {
    pub title: &'static str,
    pub sections: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<&'static str>,
}

const LEGAL_LAST_UPDATED: Option<&str> = Some("January 2026");

pub const ABOUT: StaticPage = StaticPage {
    title: "About Codejinx",
    sections: &["Our Story", "Our Mission", "Our Vision", "Our Values", "Meet the Team"],
    last_updated: None,
};

pub const STUDENT_TOOLS: StaticPage = StaticPage {
    title: "Codejinx Study Simplifier",
    sections: &["Enter Your Study Material", "Why Use Our Study Simplifier?"],
    last_updated: None,
};

pub const CONTACT: StaticPage = StaticPage {
    title: "Get In Touch",
    sections: &["Send a Message", "Contact Information"],
    last_updated: None,
};

pub const PRIVACY: StaticPage = StaticPage {
    title: "Privacy Policy",
    sections: &[
        "Introduction",
        "Information We Collect",
        "How We Use Your Information",
        "Data Security",
        "Your Rights",
        "Contact Us",
    ],
    last_updated: LEGAL_LAST_UPDATED,
};

pub const TERMS: StaticPage = StaticPage {
    title: "Terms of Service",
    sections: &[
        "Agreement to Terms",
        "Use License",
        "Service Availability",
        "User Responsibilities",
        "Intellectual Property",
        "Limitation of Liability",
        "Changes to Terms",
        "Contact Information",
    ],
    last_updated: LEGAL_LAST_UPDATED,
};

pub const COOKIES: StaticPage = StaticPage {
    title: "Cookie Policy",
    sections: &[
        "What Are Cookies?",
        "Types of Cookies We Use",
        "How We Use Cookies",
        "Managing Cookies",
        "Third-Party Cookies",
        "Updates to This Policy",
        "Contact Us",
    ],
    last_updated: LEGAL_LAST_UPDATED,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Page {
    Home { state: PageState<HomeView> },
    Services { state: PageState<Vec<Service>> },
    ServiceDetail { state: PageState<Service> },
    Portfolio { state: PageState<PortfolioView> },
    ProjectDetail { state: PageState<PortfolioProject> },
    Blog { state: PageState<Vec<BlogPost>> },
    BlogPost { state: PageState<BlogPost> },
    Static { page: StaticPage },
}

impl Page {
    /// 資料型頁面的「找不到」狀態
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Page::ServiceDetail { state: PageState::NotFound }
                | Page::ProjectDetail { state: PageState::NotFound }
                | Page::BlogPost { state: PageState::NotFound }
        )
    }

    pub fn failure(&self) -> Option<(&str, bool)> {
        fn failed<T>(state: &PageState<T>) -> Option<(&str, bool)> {
            match state {
                PageState::FetchFailed { message, retryable } => Some((message.as_str(), *retryable)),
                _ => None,
            }
        }
        match self {
            Page::Home { state } => failed(state),
            Page::Services { state } => failed(state),
            Page::ServiceDetail { state } => failed(state),
            Page::Portfolio { state } => failed(state),
            Page::ProjectDetail { state } => failed(state),
            Page::Blog { state } => failed(state),
            Page::BlogPost { state } => failed(state),
            Page::Static { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SiteSettings {
    pub home: HomeLimits,
}

/// 啟動時建立一次的應用程式上下文，取代全域的 router 與內容平台單例
#[derive(Clone)]
pub struct SiteContext {
    crud: CrudClient,
    router: Router,
    settings: SiteSettings,
    simplifier: StudySimplifier,
    contact: ContactDesk,
}

impl SiteContext {
    pub fn new(store: Arc<dyn ContentStore>, router: Router, settings: SiteSettings) -> Self {
        Self {
            crud: CrudClient::new(store),
            router,
            settings,
            simplifier: StudySimplifier::default(),
            contact: ContactDesk::default(),
        }
    }

    pub fn with_tools(mut self, simplifier: StudySimplifier, contact: ContactDesk) -> Self {
        self.simplifier = simplifier;
        self.contact = contact;
        self
    }

    pub fn crud(&self) -> &CrudClient {
        &self.crud
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn simplifier(&self) -> &StudySimplifier {
        &self.simplifier
    }

    pub fn contact_desk(&self) -> &ContactDesk {
        &self.contact
    }

    /// 解析路徑並載入對應頁面。`selection` 只對作品集頁有作用。
    pub async fn open(&self, path: &str, selection: FacetSelection) -> (Route, Page) {
        let resolution = self.router.resolve(path);
        if resolution.redirected {
            tracing::info!("'{}' is not a known page, showing home", path);
        }
        let page = self.load(&resolution.route, selection).await;
        (resolution.route, page)
    }

    pub async fn load(&self, route: &Route, selection: FacetSelection) -> Page {
        tracing::debug!("Loading {} from {}", route, self.crud.source());

        match route {
            Route::Home => Page::Home {
                state: pages::load_home(&self.crud, self.settings.home).await,
            },
            Route::Services => Page::Services {
                state: pages::load_services(&self.crud).await,
            },
            Route::ServiceDetail(id) => Page::ServiceDetail {
                state: pages::load_service(&self.crud, id).await,
            },
            Route::Portfolio => Page::Portfolio {
                state: pages::load_portfolio(&self.crud, selection).await,
            },
            Route::ProjectDetail(id) => Page::ProjectDetail {
                state: pages::load_project(&self.crud, id).await,
            },
            Route::Blog => Page::Blog {
                state: pages::load_blog(&self.crud).await,
            },
            Route::BlogPost(token) => Page::BlogPost {
                state: pages::load_blog_post(&self.crud, token).await,
            },
            Route::StudentTools => Page::Static { page: STUDENT_TOOLS },
            Route::About => Page::Static { page: ABOUT },
            Route::Contact => Page::Static { page: CONTACT },
            Route::Privacy => Page::Static { page: PRIVACY },
            Route::Terms => Page::Static { page: TERMS },
            Route::Cookies => Page::Static { page: COOKIES },
        }
    }
}
