use maud::{html, Markup, DOCTYPE};

pub fn home_page() -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Brewfinder" }
            }
            body {
                h1 { "Brewfinder" }
                p { "Coffee-shop discovery API. Everything below speaks JSON." }
                ul {
                    li { code { "GET /api/coffee-shops?longLat=<lng,lat>&limit=<1-20>" } " — nearby listings" }
                    li { code { "GET /api/coffee-shop?id=<id>&idx=<n>" } " — one listing, {} when unknown" }
                    li { code { "POST /api/coffee-shop" } " — persist a listing (find-or-create)" }
                    li { code { "POST /api/coffee-shop/vote" } " — body {\"id\": ...}" }
                    li { code { "POST /api/coffee-shop/comments" } " — body {\"id\",\"name\",\"comment\",\"rating\"}" }
                    li { code { "GET /api/coffee-shop/comments?id=<id>" } " — persisted comments and votes" }
                    li { code { "GET /api/health" } }
                }
            }
        }
    }
}
