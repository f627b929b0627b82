use crate::models::ProgressView;
use crate::theme::Theme;

pub fn render_index(view: &ProgressView, theme: Theme) -> String {
    let theme_attr = match theme {
        Theme::Light => r#" data-theme="light""#,
        Theme::Dark => "",
    };
    let banner_class = if view.complete { "banner hidden" } else { "banner" };
    let last_completed = if view.last_completed.is_empty() {
        String::new()
    } else {
        format!("✅ Last completed: {}", view.last_completed)
    };

    INDEX_HTML
        .replace("{{THEME_ATTR}}", theme_attr)
        .replace("{{BANNER_CLASS}}", banner_class)
        .replace("{{STREAK}}", &view.streak.to_string())
        .replace("{{LAST_COMPLETED}}", &escape(&last_completed))
        .replace("{{CHECKED}}", &view.checked_count.to_string())
        .replace("{{TOTAL}}", &view.total.to_string())
        .replace("{{PERCENT}}", &view.percent.to_string())
        .replace("{{ITEMS}}", &render_items(view))
        .replace("{{APPLICATIONS}}", &view.applications_today.to_string())
}

fn render_items(view: &ProgressView) -> String {
    view.items
        .iter()
        .map(|item| {
            let id = escape(&item.id);
            format!(
                r#"<li class="platform-item{checked_class}" data-platform-id="{id}">
          <input type="checkbox" id="platform-{id}"{checked} aria-label="Check {name}" />
          <a href="{url}" target="_blank" rel="noopener noreferrer">{name}</a>
        </li>"#,
                checked_class = if item.checked { " checked" } else { "" },
                checked = if item.checked { " checked" } else { "" },
                name = escape(&item.name),
                url = escape(&item.url),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub const SERVICE_WORKER_JS: &str = r#"const CACHE_NAME = "internship-tracker-v1";

self.addEventListener("install", () => self.skipWaiting());

self.addEventListener("activate", (event) => {
  event.waitUntil(
    caches
      .keys()
      .then((keys) => Promise.all(keys.filter((key) => key !== CACHE_NAME).map((key) => caches.delete(key))))
      .then(() => self.clients.claim())
  );
});

self.addEventListener("fetch", (event) => {
  event.respondWith(fetch(event.request));
});
"#;

pub const MANIFEST_JSON: &str = r##"{
  "name": "Internship Daily Tracker",
  "short_name": "Tracker",
  "start_url": "/",
  "display": "standalone",
  "background_color": "#14161a",
  "theme_color": "#ff6b4a"
}
"##;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en"{{THEME_ATTR}}>
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Internship Daily Tracker</title>
  <link rel="manifest" href="/manifest.webmanifest" />
  <style>
    :root {
      --bg: #14161a;
      --card: #1f2228;
      --ink: #f3f1ec;
      --muted: #9a9791;
      --accent: #ff6b4a;
      --ok: #3ecf8e;
    }

    :root[data-theme="light"] {
      --bg: #f8f3e6;
      --card: #ffffff;
      --ink: #2b2a28;
      --muted: #5f5c57;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(640px, 100%);
      background: var(--card);
      border-radius: 24px;
      padding: 32px;
      display: grid;
      gap: 20px;
    }

    header {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    h1 {
      margin: 0;
      font-size: 1.8rem;
    }

    .banner {
      padding: 12px 16px;
      border-radius: 12px;
      background: rgba(255, 107, 74, 0.15);
    }

    .hidden {
      display: none;
    }

    .streak {
      font-size: 1.4rem;
    }

    .muted {
      color: var(--muted);
    }

    .progress-bar {
      height: 10px;
      border-radius: 999px;
      background: rgba(127, 127, 127, 0.25);
      overflow: hidden;
    }

    .progress-bar span {
      display: block;
      height: 100%;
      width: var(--progress-width, 0%);
      background: var(--accent);
      transition: width 240ms ease;
    }

    ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    .platform-item {
      display: flex;
      gap: 12px;
      align-items: center;
    }

    .platform-item.checked a {
      text-decoration: line-through;
      color: var(--ok);
    }

    a {
      color: var(--ink);
    }

    .row {
      display: flex;
      gap: 10px;
      align-items: center;
      flex-wrap: wrap;
    }

    button {
      border: none;
      border-radius: 10px;
      padding: 10px 14px;
      background: var(--accent);
      color: #fff;
      cursor: pointer;
      font: inherit;
    }

    button.secondary {
      background: transparent;
      color: var(--ink);
      border: 1px solid var(--muted);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Internship Daily Tracker</h1>
      <button id="theme-toggle" class="secondary" type="button">Theme</button>
    </header>

    <div id="reminder-banner" class="{{BANNER_CLASS}}">Don't forget to check every platform today!</div>

    <section>
      <div class="streak">🔥 Streak: <strong id="streak-value">{{STREAK}}</strong> days</div>
      <div id="last-completed" class="muted">{{LAST_COMPLETED}}</div>
    </section>

    <section id="progress-wrap">
      <div class="progress-bar" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow="{{PERCENT}}" style="--progress-width: {{PERCENT}}%"><span></span></div>
      <p id="progress-text" class="muted">{{CHECKED}} / {{TOTAL}} completed</p>
    </section>

    <ul id="platform-list" role="list">
        {{ITEMS}}
    </ul>

    <div class="row">
      <button id="open-all" type="button">Open all</button>
      <button id="reset-today" class="secondary" type="button">Reset today</button>
    </div>

    <section class="row">
      <span>Applications today:</span>
      <button id="apply-decrement" class="secondary" type="button">−</button>
      <strong id="apply-count">{{APPLICATIONS}}</strong>
      <button id="apply-increment" class="secondary" type="button">+</button>
    </section>

    <div id="install-wrap" class="hidden">
      <button id="install-app" type="button">Install app</button>
    </div>
  </main>

  <script>
    const NOTIFICATION_TITLE = 'Internship Daily Tracker';
    const NOTIFICATION_BODY = '🔥 All platforms checked! Great job!';

    const post = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body || {})
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const render = (view) => {
      document.getElementById('streak-value').textContent = view.streak;
      document.getElementById('last-completed').textContent = view.lastCompleted
        ? '✅ Last completed: ' + view.lastCompleted
        : '';
      document.getElementById('progress-text').textContent = view.checkedCount + ' / ' + view.total + ' completed';
      const bar = document.querySelector('.progress-bar');
      bar.setAttribute('aria-valuenow', view.percent);
      bar.style.setProperty('--progress-width', view.percent + '%');
      document.getElementById('apply-count').textContent = view.applicationsToday;
      document.getElementById('reminder-banner').classList.toggle('hidden', view.complete);
      view.items.forEach((item) => {
        const li = document.querySelector('[data-platform-id="' + item.id + '"]');
        if (!li) return;
        li.classList.toggle('checked', item.checked);
        li.querySelector('input').checked = item.checked;
      });
    };

    const showNotification = () => {
      if (!('Notification' in window)) return;
      const show = () => {
        try {
          new Notification(NOTIFICATION_TITLE, { body: NOTIFICATION_BODY });
        } catch (_) {}
      };
      if (Notification.permission === 'granted') {
        show();
      } else if (Notification.permission !== 'denied') {
        Notification.requestPermission().then((p) => {
          if (p === 'granted') show();
        });
      }
    };

    document.querySelectorAll('#platform-list input').forEach((box) => {
      box.addEventListener('change', () => {
        const id = box.closest('li').dataset.platformId;
        post('/api/items/' + encodeURIComponent(id), { checked: box.checked })
          .then((view) => {
            render(view);
            if (view.justCompleted) showNotification();
          })
          .catch(() => {});
      });
    });

    document.getElementById('reset-today').addEventListener('click', () => {
      post('/api/reset').then(render).catch(() => {});
    });

    document.getElementById('apply-increment').addEventListener('click', () => {
      post('/api/applications', { delta: 1 }).then(render).catch(() => {});
    });

    document.getElementById('apply-decrement').addEventListener('click', () => {
      post('/api/applications', { delta: -1 }).then(render).catch(() => {});
    });

    document.getElementById('open-all').addEventListener('click', async () => {
      const catalog = await (await fetch('/api/catalog')).json();
      catalog.forEach((p) => window.open(p.url, '_blank', 'noopener,noreferrer'));
    });

    document.getElementById('theme-toggle').addEventListener('click', () => {
      post('/api/theme/toggle')
        .then(({ theme }) => {
          if (theme === 'light') {
            document.documentElement.setAttribute('data-theme', 'light');
          } else {
            document.documentElement.removeAttribute('data-theme');
          }
        })
        .catch(() => {});
    });

    let deferredInstallPrompt = null;
    const installWrap = document.getElementById('install-wrap');
    window.addEventListener('beforeinstallprompt', (e) => {
      e.preventDefault();
      deferredInstallPrompt = e;
      installWrap.classList.remove('hidden');
    });
    document.getElementById('install-app').addEventListener('click', () => {
      if (!deferredInstallPrompt) return;
      deferredInstallPrompt.prompt();
      deferredInstallPrompt.userChoice.then((choice) => {
        if (choice.outcome === 'accepted') installWrap.classList.add('hidden');
        deferredInstallPrompt = null;
      });
    });

    if ('serviceWorker' in navigator) {
      window.addEventListener('load', () => {
        navigator.serviceWorker.register('/sw.js').catch(() => {});
      });
    }

    document.body.addEventListener('click', () => {
      post('/api/notifications/permission').catch(() => {});
      if ('Notification' in window && Notification.permission === 'default') {
        Notification.requestPermission();
      }
    }, { once: true });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemView;

    fn sample_view() -> ProgressView {
        ProgressView {
            items: vec![ItemView {
                id: "linkedin".into(),
                name: "LinkedIn".into(),
                url: "https://www.linkedin.com/jobs".into(),
                checked: true,
            }],
            checked_count: 1,
            total: 1,
            percent: 100,
            complete: true,
            streak: 7,
            last_completed: "15 Feb 2026".into(),
            applications_today: 3,
            just_completed: false,
        }
    }

    #[test]
    fn index_fills_every_placeholder() {
        let html = render_index(&sample_view(), Theme::Light);
        assert!(!html.contains("{{"));
        assert!(html.contains(r#"<html lang="en" data-theme="light">"#));
        assert!(html.contains("✅ Last completed: 15 Feb 2026"));
        assert!(html.contains(r#"class="banner hidden""#));
        assert!(html.contains("1 / 1 completed"));
        assert!(html.contains(r#"id="platform-linkedin" checked"#));
    }

    #[test]
    fn escape_handles_markup() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
