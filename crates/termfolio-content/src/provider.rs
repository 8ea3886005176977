//! The text shown for each tab.

use std::fmt::Write as _;

use crate::blog::{find_post, BlogPost, BLOG_POSTS};
use crate::section::Section;
use crate::tab::Tab;

/// Returned for any tab (or blog post) that does not exist.
pub const NOT_FOUND: &str = "Command not found";

/// Produces the full text for a tab and optional sub-selection.
///
/// Implementations must be pure: the same inputs always give the same text.
pub trait ContentProvider {
    /// Typed lookup. Total over every section.
    fn render(&self, section: Section) -> String;

    /// String-keyed lookup. Unknown tabs and unknown blog posts give
    /// [`NOT_FOUND`]; `selection` is ignored outside the blog tab.
    fn provide(&self, tab: &str, selection: Option<&str>) -> String {
        let Some(tab) = Tab::from_name(tab) else {
            return NOT_FOUND.to_string();
        };
        let section = match (tab, selection) {
            (Tab::Blog, Some(id)) => match find_post(id) {
                Some(post) => Section::Blog(Some(post)),
                None => return NOT_FOUND.to_string(),
            },
            (tab, _) => Section::from(tab),
        };
        self.render(section)
    }
}

const HOME: &str = "Welcome to Ibrahim Zaman's terminal portfolio!
Feel free to explore by clicking the tabs above.

[ibrahimzaman-web:~/]$
I'm a software developer passionate about creating elegant solutions.";

const ABOUT: &str = "[ibrahimzaman-web:~/about]$ cat about.txt

Name: Ibrahim Zaman <Mr Tux>
Role: Software engineer
Skills: \n\
- Frontend: React, NextJS, TypeScript
- Backend: Node.js
- DevOps: Docker, Vercel

Education:
- B.S. Accounting & Finance";

const PROJECTS: &str = "[ibrahimzaman-web:~/projects]$ ls -la
total: 4
-rw-r--r--  1 ibrahimzaman ibrahimzaman Oct 26 2024 project1/
-rw-r--r--  1 ibrahimzaman ibrahimzaman Oct 26 2024 project2/

[ibrahimzaman-web:~/projects]$ cat project1/README.md
# E-commerce Platform
- Built with MedusaJS and NextJS.
- Integrated payment processing
- Real-time inventory management

# Digital Creator Marketplace
- Built with AdonisJS, NextJS.
- 5000+ creators
- 97% commission-free
";

const CONTACT: &str = "[ibrahimzaman-web:~/contact]$ echo $CONTACT_INFO

Email: abrahimzaman3@gmail.com
GitHub: github.com/abrahimzaman360
LinkedIn: linkedin.com/in/abrahimzaman360
Twitter: @abrahimzaman360

[ibrahimzaman-web:~/contact]$ echo \"Feel free to reach out!\"";

/// The built-in portfolio content.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticContent;

impl StaticContent {
    fn blog_listing(posts: &[BlogPost]) -> String {
        let mut out = String::from("[ibrahimzaman-web:~/blog]$ ls -la blog/\n");
        let _ = writeln!(out, "total: {}", posts.len());
        out.push_str("drwxr-xr-x  3 user  user  180 Oct 26 2024 .\n");
        out.push_str("drwxr-xr-x  5 user  user  180 Oct 26 2024 ..\n");
        for post in posts {
            let _ = writeln!(
                out,
                "-rw-r--r--  1 user  user  2.1K {} {}",
                post.date, post.filename
            );
        }
        out.push_str(
            "\n[user@portfolio ~/blog]$ echo \"Select a blog post by clicking on its name\"",
        );
        out
    }

    fn blog_post(post: &BlogPost) -> String {
        format!(
            "[ibrahimzaman-web:~/blog]$ cat {}\n\n{}\n\n[user@portfolio ~/blog]$ echo \"Type 'back' to return to blog list\"",
            post.filename, post.content
        )
    }
}

impl ContentProvider for StaticContent {
    fn render(&self, section: Section) -> String {
        match section {
            Section::Home => HOME.to_string(),
            Section::About => ABOUT.to_string(),
            Section::Projects => PROJECTS.to_string(),
            Section::Blog(None) => Self::blog_listing(&BLOG_POSTS),
            Section::Blog(Some(post)) => Self::blog_post(post),
            Section::Contact => CONTACT.to_string(),
        }
    }
}
