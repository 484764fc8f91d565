//! Pure HTML rendering for the skills directory page. Everything dynamic on
//! the page flows through [`escape_html`]; the fixed style and copy-button
//! script blocks are spliced in verbatim.

use crate::collector::SkillRecord;

/// Stand-in skill name for install examples when the repo has no skills yet.
/// Escaped like any other text, so it surfaces as `&lt;skill-name&gt;`.
pub const SKILL_NAME_PLACEHOLDER: &str = "<skill-name>";

/// Card body shown for skills whose front-matter has no description.
pub const NO_DESCRIPTION_FALLBACK: &str = "No description provided yet.";

/// GitHub mark, used on the card title and source-path links.
const GITHUB_ICON_PATH: &str = "M12 2C6.48 2 2 6.59 2 12.25c0 4.53 2.87 8.37 6.84 9.73.5.1.66-.22.66-.49v-1.72c-2.78.62-3.37-1.21-3.37-1.21-.46-1.2-1.12-1.52-1.12-1.52-.92-.64.07-.63.07-.63 1.01.07 1.55 1.08 1.55 1.08.9 1.58 2.35 1.13 2.92.86.09-.67.35-1.13.64-1.39-2.22-.26-4.56-1.14-4.56-5.09 0-1.13.39-2.05 1.03-2.77-.1-.26-.45-1.31.1-2.73 0 0 .84-.28 2.75 1.06A9.3 9.3 0 0 1 12 6.8c.85 0 1.71.12 2.51.35 1.9-1.34 2.74-1.06 2.74-1.06.55 1.42.2 2.47.1 2.73.64.72 1.03 1.64 1.03 2.77 0 3.96-2.35 4.83-4.58 5.08.36.32.68.96.68 1.94v2.87c0 .27.16.6.67.49A10.27 10.27 0 0 0 22 12.25C22 6.59 17.52 2 12 2Z";

const STYLE_BLOCK: &str = r#"    <style>
      .copy-btn.copy-success {
        border-color: #16a34a;
        color: #16a34a;
      }
      .copy-btn.copy-success .copy-icon-success {
        stroke: #16a34a;
      }
      .card-description {
        display: -webkit-box;
        -webkit-box-orient: vertical;
        -webkit-line-clamp: 4;
        overflow: hidden;
      }
    </style>"#;

/// Copy-to-clipboard wiring for every `[data-copy]` element. Falls back to a
/// hidden textarea where the async clipboard API is unavailable; the success
/// styling reverts after 1.2s.
const COPY_SCRIPT: &str = r#"<script>
  (() => {
    const copyText = async (text) => {
      if (navigator.clipboard && navigator.clipboard.writeText) {
        await navigator.clipboard.writeText(text);
        return;
      }
      const fallback = document.createElement('textarea');
      fallback.value = text;
      fallback.setAttribute('readonly', 'readonly');
      fallback.style.position = 'absolute';
      fallback.style.left = '-9999px';
      document.body.appendChild(fallback);
      fallback.select();
      document.execCommand('copy');
      document.body.removeChild(fallback);
    };

    const markCopied = (button) => {
      const original = button.dataset.originalLabel || '';
      const icon = button.querySelector('svg');
      const labelEl = button.querySelector('.copy-label');
      if (!button.dataset.originalLabel) {
        button.dataset.originalLabel = labelEl ? labelEl.textContent || '' : '';
      }
      button.classList.add('copy-success');
      if (labelEl) labelEl.textContent = 'Copied';
      if (icon) icon.classList.add('copy-icon-success');
      setTimeout(() => {
        button.classList.remove('copy-success');
        if (labelEl) labelEl.textContent = original;
        if (icon) icon.classList.remove('copy-icon-success');
      }, 1200);
    };

    document.querySelectorAll('[data-copy]').forEach((button) => {
      button.addEventListener('click', async () => {
        const text = button.getAttribute('data-copy') || '';
        try {
          await copyText(text);
          markCopied(button);
        } catch {
          // Ignore copy failures.
        }
      });
    });
  })();
</script>"#;

/// Escape text for both element content and double-quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// The example invocations shown in the Install section, parameterized by
/// the repo and one representative skill name.
fn install_commands(repo: &str, example_skill: &str) -> [String; 6] {
    [
        format!("npx skills add {} --all", repo),
        format!("npx skills add {} --skill {}", repo, example_skill),
        format!(
            "npx skills add {} --skill '*' -a claude-code -a opencode -a codex",
            repo
        ),
        format!("npx skills add {} --agent '*' --skill {}", repo, example_skill),
        format!("npx skills add {} --skill {} -a codex", repo, example_skill),
        format!("npx skills add {} --list", repo),
    ]
}

fn skill_badges(skills: &[SkillRecord]) -> String {
    if skills.is_empty() {
        return r#"<span class="text-slate-500">None</span>"#.to_string();
    }
    skills
        .iter()
        .map(|skill| {
            format!(
                r#"<span class="rounded-full bg-slate-100 px-2.5 py-1 text-xs font-semibold text-slate-600">{}</span>"#,
                escape_html(&skill.name)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn skill_card(repo: &str, repo_url: &str, skill: &SkillRecord) -> String {
    let path = format!("skills/{}", skill.dir);
    let url = format!("{}/tree/main/{}", repo_url, path);
    let description = if skill.description.is_empty() {
        NO_DESCRIPTION_FALLBACK.to_string()
    } else {
        escape_html(&skill.description)
    };
    let install_cmd = format!("npx skills add {} --skill {}", repo, skill.name);

    format!(
        r#"<div class="flex h-full flex-col gap-3 rounded-lg border border-slate-200 bg-white p-5 shadow-sm">
            <div>
              <a class="inline-flex items-center gap-1.5 text-base font-semibold text-slate-900" href="{url}" target="_blank" rel="noreferrer">
                <svg aria-hidden="true" viewBox="0 0 24 24" class="h-3.5 w-3.5" fill="currentColor">
                  <path d="{icon}" />
                </svg>
                {name}
              </a>
              <div class="mt-2 inline-flex rounded-md bg-slate-100 px-2 py-1 text-[10px] font-semibold uppercase tracking-[0.2em] text-slate-500">Skill</div>
            </div>
            <div class="card-description text-sm text-slate-600">{description}</div>
            <div class="mt-auto flex flex-col gap-3">
              <div class="relative">
                <button type="button" class="absolute -right-2 -top-2 inline-flex items-center justify-center rounded-md border border-slate-300 bg-slate-50 p-1 text-slate-500 shadow-sm transition-colors duration-200 copy-btn" data-copy="{install}">
                  <span class="sr-only copy-label">Copy install command</span>
                  <svg aria-hidden="true" viewBox="0 0 24 24" class="h-3.5 w-3.5" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
                    <rect x="9" y="9" width="13" height="13" rx="2" />
                    <path d="M5 15V5a2 2 0 0 1 2-2h10" />
                  </svg>
                </button>
                <div class="flex h-[5rem] items-start rounded-md bg-slate-900 px-3 py-2 pr-8 text-xs leading-5 text-slate-100"><code>{install}</code></div>
              </div>
              <a class="inline-flex items-center gap-1.5 text-xs font-semibold text-slate-500" href="{url}" target="_blank" rel="noreferrer">
                <svg aria-hidden="true" viewBox="0 0 24 24" class="h-3 w-3" fill="currentColor">
                  <path d="{icon}" />
                </svg>
                {source_path}
              </a>
            </div>
          </div>"#,
        url = escape_html(&url),
        icon = GITHUB_ICON_PATH,
        name = escape_html(&skill.name),
        description = description,
        install = escape_html(&install_cmd),
        source_path = escape_html(&path),
    )
}

/// Render the full directory page for `repo` with one card per skill, in
/// input order. Pure: same inputs, same markup.
pub fn render_page(repo: &str, skills: &[SkillRecord]) -> String {
    let repo_url = format!("https://github.com/{}", repo);
    let skill_count = skills.len();

    let example_skill = skills
        .first()
        .map(|s| s.name.as_str())
        .unwrap_or(SKILL_NAME_PLACEHOLDER);
    let commands_block = install_commands(repo, example_skill).join("\n");

    let plural = if skill_count == 1 { "" } else { "s" };

    let cards: Vec<String> = skills
        .iter()
        .map(|skill| skill_card(repo, &repo_url, skill))
        .collect();
    let cards_html = if cards.is_empty() {
        r#"<p class="text-sm text-slate-500">No skills found.</p>"#.to_string()
    } else {
        cards.join("\n")
    };

    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
    <script src="https://cdn.tailwindcss.com"></script>
{style}
  </head>
  <body class="bg-slate-50 text-slate-900">
    <main class="max-w-5xl mx-auto px-6 py-12">
      <header class="rounded-xl border border-slate-200 bg-white p-8 shadow-sm">
        <div class="flex flex-col gap-6 sm:flex-row sm:items-start sm:justify-between">
          <div>
            <div class="inline-flex items-center rounded-full bg-slate-100 px-3 py-1 text-xs font-semibold uppercase tracking-[0.2em] text-slate-600">Agent Skills</div>
            <h1 class="mt-4 text-3xl font-semibold tracking-tight text-slate-900 sm:text-4xl">{title}</h1>
            <p class="mt-2 text-sm text-slate-600">Auto-generated directory from <code class="rounded bg-slate-100 px-1.5 py-0.5">skills/*/SKILL.md</code>.</p>
            <div class="mt-4 text-sm text-slate-600">{count} skill{plural} • <a class="text-slate-900 underline" href="{repo_url}" target="_blank" rel="noreferrer">View repo</a></div>
          </div>
        </div>
      </header>

      <section class="mt-8 rounded-xl border border-slate-200 bg-white p-6 shadow-sm">
        <div class="flex flex-wrap items-start justify-between gap-4">
          <div>
            <h2 class="text-lg font-semibold text-slate-900">Install</h2>
            <p class="mt-1 text-sm text-slate-600">Common install patterns for this repo:</p>
          </div>
        </div>
        <pre class="mt-4 overflow-x-auto rounded-lg bg-slate-900 p-4 text-sm text-slate-100"><code>{commands}</code></pre>
        <div class="mt-4 flex flex-wrap items-center gap-2 text-xs text-slate-600">
          <span class="font-semibold text-slate-700">Available skills:</span>
          {badges}
        </div>
      </section>

      <section class="mt-8">
        <div class="flex items-center">
          <h2 class="text-lg font-semibold text-slate-900">Available Skills</h2>
          <span class="ml-2 rounded-full bg-slate-100 px-3 py-1 text-xs font-semibold text-slate-600">{count}</span>
        </div>
        <div class="mt-4 grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
          {cards}
        </div>
      </section>

      <footer class="mt-10 text-xs text-slate-500">
        Generated by <code class="rounded bg-slate-100 px-1">skillsite build</code>
      </footer>
    </main>
    {script}
  </body>
</html>
"#,
        title = escape_html(repo),
        style = STYLE_BLOCK,
        count = skill_count,
        plural = plural,
        repo_url = escape_html(&repo_url),
        commands = escape_html(&commands_block),
        badges = skill_badges(skills),
        cards = cards_html,
        script = COPY_SCRIPT,
    )
}
