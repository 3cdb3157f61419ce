//! Built-in definition of the Spanish Vue.js 3 documentation portal.
//!
//! This is the configuration used when no `portal.toml` overrides it.

use indexmap::IndexMap;

use crate::head::HeadTag;
use crate::markdown::MarkdownConfig;
use crate::nav::NavItem;
use crate::plugins::{
    ContainerOptions, LastUpdatedOptions, Plugin, PwaOptions, UpdatePopup,
};
use crate::sidebar::{SidebarConfig, SidebarEntry, SidebarSection};
use crate::theme::{AlgoliaConfig, CarbonAdsConfig, ThemeConfig};
use crate::SiteConfig;

fn routes<'a>(paths: &'a [&'a str]) -> impl Iterator<Item = SidebarEntry> + 'a {
    paths.iter().copied().map(SidebarEntry::path)
}

fn cookbook() -> SidebarSection {
    vec![SidebarEntry::expanded_group(
        "Cookbook",
        routes(&[
            "/cookbook/",
            "/cookbook/editable-svg-icons",
            "/cookbook/debugging-in-vscode",
            "/cookbook/automatic-global-registration-of-base-components",
        ]),
    )]
}

fn guide() -> SidebarSection {
    vec![
        SidebarEntry::expanded_group(
            "Conocimientos Esenciales",
            routes(&[
                "/guide/installation",
                "/guide/introduction",
                "/guide/instance",
                "/guide/template-syntax",
                "/guide/data-methods",
                "/guide/computed",
                "/guide/class-and-style",
                "/guide/conditional",
                "/guide/list",
                "/guide/events",
                "/guide/forms",
                "/guide/component-basics",
            ]),
        ),
        SidebarEntry::expanded_group(
            "Componentes en Profundidad",
            routes(&[
                "/guide/component-registration",
                "/guide/component-props",
                "/guide/component-attrs",
                "/guide/component-custom-events",
                "/guide/component-slots",
                "/guide/component-provide-inject",
                "/guide/component-dynamic-async",
                "/guide/component-template-refs",
                "/guide/component-edge-cases",
            ]),
        ),
        SidebarEntry::expanded_group(
            "Transiciones & Animaciones",
            routes(&[
                "/guide/transitions-overview",
                "/guide/transitions-enterleave",
                "/guide/transitions-list",
                "/guide/transitions-state",
            ]),
        ),
        SidebarEntry::expanded_group(
            "Reusabilidad & Composición",
            std::iter::once(SidebarEntry::group(
                "API de Comoposición",
                routes(&[
                    "/guide/composition-api-introduction",
                    "/guide/composition-api-setup",
                    "/guide/composition-api-lifecycle-hooks",
                    "/guide/composition-api-provide-inject",
                    "/guide/composition-api-template-refs",
                ]),
            ))
            .chain(routes(&[
                "/guide/mixins",
                "/guide/custom-directive",
                "/guide/teleport",
                "/guide/render-function",
                "/guide/plugins",
            ])),
        ),
        SidebarEntry::expanded_group(
            "Guías Avanzadas",
            [
                SidebarEntry::path("/guide/web-components"),
                SidebarEntry::group(
                    "Reactividad",
                    routes(&[
                        "/guide/reactivity",
                        "/guide/reactivity-fundamentals",
                        "/guide/reactivity-computed-watchers",
                    ]),
                ),
                SidebarEntry::path("/guide/optimizations"),
                SidebarEntry::path("/guide/change-detection"),
            ],
        ),
        SidebarEntry::expanded_group(
            "Herramientas",
            routes(&[
                "/guide/single-file-component",
                "/guide/testing",
                "/guide/typescript-support",
                "/guide/mobile",
                "/guide/tooling/deployment",
            ]),
        ),
        SidebarEntry::expanded_group(
            "Escalando la Aplicación",
            routes(&[
                "/guide/routing",
                "/guide/state-management",
                "/guide/ssr",
                "/guide/security",
            ]),
        ),
        SidebarEntry::expanded_group(
            "Accesibilidad",
            routes(&[
                "/guide/a11y-basics",
                "/guide/a11y-semantics",
                "/guide/a11y-standards",
                "/guide/a11y-resources",
            ]),
        ),
    ]
}

fn api() -> SidebarSection {
    let mut section: SidebarSection = routes(&[
        "/api/application-config",
        "/api/application-api",
        "/api/global-api",
    ])
    .collect();
    section.push(
        SidebarEntry::expanded_group(
            "Opciones",
            routes(&[
                "/api/options-data",
                "/api/options-dom",
                "/api/options-lifecycle-hooks",
                "/api/options-assets",
                "/api/options-composition",
                "/api/options-misc",
            ]),
        )
        .with_path("/api/options-api"),
    );
    section.extend(routes(&[
        "/api/instance-properties",
        "/api/instance-methods",
        "/api/directives",
        "/api/special-attributes",
        "/api/built-in-components.md",
    ]));
    section.push(
        SidebarEntry::expanded_group(
            "API de Reactividad",
            routes(&[
                "/api/basic-reactivity",
                "/api/refs-api",
                "/api/computed-watch-api",
                "/api/effect-scope",
            ]),
        )
        .with_path("/api/reactivity-api"),
    );
    section.push(SidebarEntry::path("/api/composition-api"));
    section.push(SidebarEntry::expanded_group(
        "Componentes de un Solo Archivo",
        [
            SidebarEntry::header("Especificación", "/api/sfc-spec"),
            SidebarEntry::header("Herramientas", "/api/sfc-tooling"),
            SidebarEntry::header("<script setup>", "/api/sfc-script-setup"),
            SidebarEntry::header("Características de <style>", "/api/sfc-style"),
        ],
    ));
    section
}

fn examples() -> SidebarSection {
    vec![SidebarEntry::expanded_group(
        "Ejemplos",
        routes(&[
            "/examples/markdown",
            "/examples/commits",
            "/examples/grid-component",
            "/examples/tree-view",
            "/examples/svg",
            "/examples/modal",
            "/examples/elastic-header",
            "/examples/select2",
            "/examples/todomvc",
        ]),
    )]
}

fn migration() -> SidebarSection {
    let mut section: SidebarSection = routes(&[
        "/guide/migration/introduction",
        "/guide/migration/migration-build",
    ])
    .collect();
    section.push(SidebarEntry::expanded_group(
        "Detalles",
        routes(&[
            "/guide/migration/array-refs",
            "/guide/migration/async-components",
            "/guide/migration/attribute-coercion",
            "/guide/migration/attrs-includes-class-style",
            "/guide/migration/children",
            "/guide/migration/custom-directives",
            "/guide/migration/custom-elements-interop",
            "/guide/migration/data-option",
            "/guide/migration/emits-option",
            "/guide/migration/events-api",
            "/guide/migration/filters",
            "/guide/migration/fragments",
            "/guide/migration/functional-components",
            "/guide/migration/global-api",
            "/guide/migration/global-api-treeshaking",
            "/guide/migration/inline-template-attribute",
            "/guide/migration/key-attribute",
            "/guide/migration/keycode-modifiers",
            "/guide/migration/listeners-removed",
            "/guide/migration/mount-changes",
            "/guide/migration/props-data",
            "/guide/migration/props-default-this",
            "/guide/migration/render-function-api",
            "/guide/migration/slots-unification",
            "/guide/migration/suspense",
            "/guide/migration/transition",
            "/guide/migration/transition-as-root",
            "/guide/migration/transition-group",
            "/guide/migration/v-on-native-modifier-removed",
            "/guide/migration/v-model",
            "/guide/migration/v-if-v-for",
            "/guide/migration/v-bind",
            "/guide/migration/vnode-lifecycle-events",
            "/guide/migration/watch",
        ]),
    ));
    section
}

fn ssr() -> SidebarSection {
    std::iter::once(SidebarEntry::labeled(
        "/guide/ssr/introduction",
        "Introducción",
    ))
    .chain(routes(&[
        "/guide/ssr/getting-started",
        "/guide/ssr/universal",
        "/guide/ssr/structure",
        "/guide/ssr/build-config",
        "/guide/ssr/server",
        "/guide/ssr/routing",
        "/guide/ssr/hydration",
    ]))
    .collect()
}

fn contributing() -> SidebarSection {
    vec![SidebarEntry::expanded_group(
        "Contribuir a la documentación",
        routes(&[
            "/guide/contributing/writing-guide",
            "/guide/contributing/doc-style-guide",
            "/guide/contributing/translations",
        ]),
    )]
}

/// Sidebar sections keyed by section identifier.
pub fn sidebars() -> IndexMap<String, SidebarSection> {
    [
        ("cookbook", cookbook()),
        ("guide", guide()),
        ("api", api()),
        ("examples", examples()),
        ("migration", migration()),
        ("ssr", ssr()),
        ("contributing", contributing()),
    ]
    .into_iter()
    .map(|(key, section)| (key.to_owned(), section))
    .collect()
}

/// Head tags in injection order.
pub fn head() -> Vec<HeadTag> {
    vec![
        HeadTag::link([
            (
                "href",
                "https://fonts.googleapis.com/css?family=Inter:300,400,500,600|Archivo:400,600|Open+Sans:400,600;display=swap",
            ),
            ("rel", "stylesheet"),
        ]),
        HeadTag::link([
            (
                "href",
                "https://stackpath.bootstrapcdn.com/font-awesome/4.7.0/css/font-awesome.min.css",
            ),
            ("rel", "stylesheet"),
        ]),
        HeadTag::link([("rel", "icon"), ("href", "/logo.png")]),
        HeadTag::link([("rel", "manifest"), ("href", "/manifest.json")]),
        HeadTag::meta("theme-color", "#3eaf7c"),
        HeadTag::meta("apple-mobile-web-app-capable", "yes"),
        HeadTag::meta("viewport", "width=device-width, initial-scale=1.0"),
        HeadTag::meta("apple-mobile-web-app-status-bar-style", "black"),
        HeadTag::link([
            ("rel", "apple-touch-icon"),
            ("href", "/images/icons/apple-icon-152x152.png"),
        ]),
        HeadTag::meta("msapplication-TileImage", "/images/icons/ms-icon-144x144.png"),
        HeadTag::meta("msapplication-TileColor", "#000000"),
        HeadTag::new("script", [("src", "https://player.vimeo.com/api/player.js")]),
        HeadTag::new(
            "script",
            [
                ("src", "https://extend.vimeocdn.com/ga/72160148.js"),
                ("defer", "defer"),
            ],
        ),
    ]
}

/// Header navigation menu.
pub fn nav() -> Vec<NavItem> {
    vec![
        NavItem::dropdown(
            "Documentación",
            [
                NavItem::link("Guía", "/guide/introduction"),
                NavItem::link("Guía de Estilos", "/style-guide/"),
                NavItem::link("Cookbook", "/cookbook/"),
                NavItem::link("Ejemplos", "/examples/markdown"),
                NavItem::link("Contribuir", "/guide/contributing/writing-guide"),
                NavItem::link("Migración desde Vue 2", "/guide/migration/introduction"),
            ],
        )
        .with_aria_label("Menú de documentación"),
        NavItem::link("Referencia de API", "/api/"),
        NavItem::dropdown(
            "Ecosistema",
            [
                NavItem::dropdown(
                    "Comunidad",
                    [
                        NavItem::link("Equipo", "/community/team/"),
                        NavItem::link("Partners", "/community/partners"),
                        NavItem::link("Unirse", "/community/join/"),
                        NavItem::link("Temas", "/community/themes/"),
                    ],
                )
                .with_aria_label("Menú de comunidad"),
                NavItem::dropdown(
                    "Proyectos Oficiales",
                    [
                        NavItem::link("Vue Router", "https://next.router.vuejs.org/"),
                        NavItem::link("Vuex", "https://next.vuex.vuejs.org/"),
                        NavItem::link("Vue CLI", "https://cli.vuejs.org/"),
                        NavItem::link(
                            "Vue Test Utils",
                            "https://next.vue-test-utils.vuejs.org/guide/",
                        ),
                        NavItem::link("Devtools", "https://devtools.vuejs.org"),
                        NavItem::link("Noticias Semanales", "https://news.vuejs.org/"),
                        NavItem::link("Blog", "https://blog.vuejs.org/"),
                    ],
                ),
            ],
        ),
        NavItem::dropdown(
            "Apoyar Vue",
            [
                NavItem::link("Donación Única", "/support-vuejs/#one-time-donations"),
                NavItem::link("Donación Recurrente", "/support-vuejs/#recurring-pledges"),
                NavItem::link("Tienda de Camisetas", "https://vue.threadless.com/"),
            ],
        )
        .with_link("/support-vuejs/"),
        NavItem::dropdown(
            "Traducciones",
            [
                NavItem::translation("中文", "https://v3.cn.vuejs.org/"),
                NavItem::translation("한국어", "https://v3.ko.vuejs.org/"),
                NavItem::translation("日本語", "https://v3.ja.vuejs.org/"),
                NavItem::translation("Русский", "https://v3.ru.vuejs.org/ru/"),
                NavItem::translation("Español", "https://vue3-docs-es.netlify.app/"),
                NavItem::link(
                    "Más Traducciones",
                    "/guide/contributing/translations#community-translations",
                ),
            ],
        )
        .with_link("#"),
    ]
}

/// Route prefix bindings, most specific first.
pub fn sidebar_bindings() -> SidebarConfig {
    SidebarConfig {
        collapsable: Some(false),
        routes: [
            ("/guide/migration/", "migration"),
            ("/guide/contributing/", "contributing"),
            ("/guide/ssr/", "ssr"),
            ("/guide/", "guide"),
            ("/community/", "guide"),
            ("/cookbook/", "cookbook"),
            ("/api/", "api"),
            ("/examples/", "examples"),
        ]
        .into_iter()
        .map(|(prefix, key)| (prefix.to_owned(), key.to_owned()))
        .collect(),
    }
}

pub fn theme() -> ThemeConfig {
    ThemeConfig {
        logo: "/logo.png".to_owned(),
        nav: nav(),
        repo: "vuejs/docs".to_owned(),
        edit_links: true,
        edit_link_text: "¡Editar esto en GitHub!".to_owned(),
        last_updated: "Última actualización".to_owned(),
        docs_dir: "src".to_owned(),
        sidebar_depth: 2,
        sidebar: sidebar_bindings(),
        smooth_scroll: false,
        algolia: Some(AlgoliaConfig {
            index_name: "vuejs-v3".to_owned(),
            app_id: "BH4D9OD16A".to_owned(),
            api_key: "bc6e8acb44ed4179c30d0a45d6140d3f".to_owned(),
        }),
        carbon_ads: Some(CarbonAdsConfig {
            carbon: "CEBDT27Y".to_owned(),
            custom: "CKYD62QM".to_owned(),
            placement: "vuejsorg".to_owned(),
        }),
        top_banner: true,
    }
}

/// Plugins in registration order.
pub fn plugins() -> Vec<Plugin> {
    vec![
        Plugin::LastUpdated(LastUpdatedOptions::default()),
        Plugin::Pwa(PwaOptions {
            service_worker: true,
            update_popup: IndexMap::from([(
                "/".to_owned(),
                UpdatePopup {
                    message: "Nuevo contenido es disponible.".to_owned(),
                    button_text: "Recargar".to_owned(),
                },
            )]),
        }),
        Plugin::Container(ContainerOptions::default()),
    ]
}

pub fn site() -> SiteConfig {
    SiteConfig {
        title: "Vue.js".to_owned(),
        description: "Vue.js - El Framework JavaScript Progresivo".to_owned(),
        head: head(),
        sidebars: sidebars(),
        theme: theme(),
        plugins: plugins(),
        markdown: MarkdownConfig { line_numbers: true },
        config_path: None,
    }
}
