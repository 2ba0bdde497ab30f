use chrono::{Local, Timelike};
use log::debug;
use regex::Regex;
use reqwest::blocking::Client;
use reqwest::cookie::Jar;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::config::Config;
use crate::document::{Document, HtmlDocument, Node};
use crate::error::{Error, Result};
use crate::transport::Transport;

/// Tokens the site embeds in its landing page and webmail script; every
/// inbox request has to echo them back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub version: String,
    pub yp: String,
    pub yj: String,
}

/// Blocking client for the YOPmail web interface.
pub struct YopmailClient {
    http: Client,
    jar: Arc<Jar>,
    base: Url,
    language: String,
    session: Session,
}

impl YopmailClient {
    /// Open a session: load the landing page, accept the cookie consent and
    /// read the tokens out of the webmail script.
    pub fn connect(cfg: &Config) -> Result<Self> {
        let mut base = Url::parse(&cfg.base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let jar = Arc::new(Jar::default());
        let mut builder = Client::builder()
            .cookie_provider(jar.clone())
            .user_agent(cfg.user_agent.clone())
            .timeout(Duration::from_secs(cfg.timeout_secs));
        builder = match &cfg.proxy {
            Some(proxy) => builder.proxy(reqwest::Proxy::all(proxy.as_str())?),
            None => builder.no_proxy(),
        };
        let http = builder.build()?;

        let mut client = Self {
            http,
            jar,
            base,
            language: cfg.language.clone(),
            session: Session::default(),
        };
        client.session = client.open_session()?;
        Ok(client)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn open_session(&self) -> Result<Session> {
        let landing = self.get(self.base.clone())?;

        let version = Regex::new(r"/ver/(\d+\.\d+)/webmail\.js")
            .map_err(|e| Error::Session(e.to_string()))?
            .captures(&landing)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| Error::Session("webmail version not found".to_string()))?;
        debug!("webmail version {version}");

        let yp = HtmlDocument::parse(&landing)
            .find("input#yp")
            .first()
            .and_then(|n| n.attr("value"))
            .map(str::to_string)
            .ok_or_else(|| Error::Session("yp token not found".to_string()))?;

        self.get(self.url("consent", &[("c", "accept")])?)?;

        let script = self.get(self.url(&format!("ver/{version}/webmail.js"), &[])?)?;
        let yj = Regex::new(r"&yj=([0-9A-Za-z]+)&")
            .map_err(|e| Error::Session(e.to_string()))?
            .captures(&script)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| Error::Session("yj token not found".to_string()))?;

        Ok(Session { version, yp, yj })
    }

    fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.base.join(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    fn inbox_url(&self, query: &[(&str, &str)]) -> Result<Url> {
        self.url(&format!("{}/inbox", self.language), query)
    }

    fn get(&self, url: Url) -> Result<String> {
        // The site checks the visitor's local time on every request.
        let now = Local::now();
        self.jar.add_cookie_str(
            &format!("ytime={}:{}", now.hour(), now.minute()),
            &self.base,
        );

        debug!("GET {url}");
        let resp = self.http.get(url.clone()).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(resp.text()?)
    }
}

impl Transport for YopmailClient {
    type Doc = HtmlDocument;

    fn list_page(&self, name: &str, page: usize) -> Result<HtmlDocument> {
        let page = page.to_string();
        let s = &self.session;
        let url = self.inbox_url(&[
            ("login", name),
            ("p", page.as_str()),
            ("d", ""),
            ("ctrl", ""),
            ("yp", s.yp.as_str()),
            ("yj", s.yj.as_str()),
            ("v", s.version.as_str()),
            ("r_c", ""),
            ("id", ""),
            ("spam", "true"),
            ("scrl", ""),
        ])?;
        Ok(HtmlDocument::parse(&self.get(url)?))
    }

    fn message_page(&self, name: &str, id: &str) -> Result<HtmlDocument> {
        let id = format!("m{id}");
        let url = self.url(
            &format!("{}/mail", self.language),
            &[("b", name), ("id", id.as_str())],
        )?;
        Ok(HtmlDocument::parse(&self.get(url)?))
    }

    fn delete_message(&self, name: &str, id: &str) -> Result<()> {
        let s = &self.session;
        let url = self.inbox_url(&[
            ("login", name),
            ("p", "1"),
            ("d", id),
            ("ctrl", ""),
            ("yp", s.yp.as_str()),
            ("yj", s.yj.as_str()),
            ("v", s.version.as_str()),
            ("r_c", ""),
            ("id", ""),
        ])?;
        self.get(url)?;
        Ok(())
    }

    fn flush_mailbox(&self, name: &str, id: &str) -> Result<()> {
        let url = self.inbox_url(&[
            ("login", name),
            ("p", "1"),
            ("d", "all"),
            ("ctrl", id),
            ("v", self.session.version.as_str()),
            ("r_c", ""),
            ("id", ""),
        ])?;
        self.get(url)?;
        Ok(())
    }
}
