use super::Shortcut;

const DEFAULT_SHORTCUTS: [(&str, &str, &str); 12] = [
    ("天气", "https://weather.com/zh-CN/", "fa-solid fa-cloud-sun"),
    ("日历", "https://calendar.google.com", "fa-regular fa-calendar-check"),
    ("Bilibili", "https://www.bilibili.com", "fa-brands fa-bilibili"),
    ("微博", "https://weibo.com", "fa-brands fa-weibo"),
    ("GitHub", "https://github.com", "fa-brands fa-github"),
    ("知乎", "https://www.zhihu.com", "fa-brands fa-zhihu"),
    ("YouTube", "https://www.youtube.com", "fa-brands fa-youtube"),
    ("ChatGPT", "https://chat.openai.com", "fa-solid fa-robot"),
    ("Gmail", "https://mail.google.com", "fa-solid fa-envelope"),
    ("淘宝", "https://www.taobao.com", "fa-solid fa-bag-shopping"),
    ("X", "https://x.com", "fa-brands fa-twitter"),
    ("V2EX", "https://v2ex.com", "fa-solid fa-layer-group"),
];

/// Curated first-run grid.
pub fn default_shortcuts() -> Vec<Shortcut> {
    DEFAULT_SHORTCUTS
        .iter()
        .map(|(name, url, icon)| Shortcut::new(*name, *url, *icon))
        .collect()
}
