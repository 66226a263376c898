//! Footer Component
//!
//! Static localized legal and navigation content. No state.

use leptos::prelude::*;

use crate::i18n::use_i18n;

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_i18n();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="incubator-banner">
                <span>{i18n.t("incubated.by")}</span>
                <a href="https://code4.ro/ro/code-for-romania-war-task-force">
                    <img
                        src="/code_logo_colored.svg"
                        alt="Code 4 Romania logo"
                        class="incubator-logo"
                    />
                </a>
            </div>
            <div class="footer-main">
                <nav class="footer-links">
                    <ul>
                        <li class="footer-heading">{i18n.t("useful.links")}</li>
                        <li><a href="/despre-proiect">{i18n.t("about.project")}</a></li>
                        <li><a href="https://dopomoha.ro/">"Dopomoha.ro"</a></li>
                        <li>
                            <a href="https://github.com/code4romania/war-support-sprijin-de-urgenta-client">
                                {i18n.t("source.code")}
                            </a>
                        </li>
                    </ul>
                    <ul>
                        <li class="footer-heading">{i18n.t("legal.info")}</li>
                        <li>
                            <a href="/politica-de-confidentialitate">
                                {i18n.t("confidentiality.policy")}
                            </a>
                        </li>
                        <li>
                            <a href="/termeni-si-conditii">
                                {i18n.t("terms.and.conditions")}
                            </a>
                        </li>
                    </ul>
                </nav>
                <div class="footer-copyright">
                    <p>{format!("© {} Code for Romania.", year)}</p>
                    <p>{i18n.t("code4ro.description")}</p>
                </div>
            </div>
        </footer>
    }
}
