use crate::utils::error::Result;
use std::collections::BTreeMap;
use std::io::Write;

pub type Subscriber = Box<dyn Fn(&mut dyn Write, i64) -> std::io::Result<()>>;

/// 發布者，依註冊順序同步通知所有訂閱者
#[derive(Default)]
pub struct Publisher {
    on_publish: Vec<Subscriber>,
}

impl Publisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(&mut dyn Write, i64) -> std::io::Result<()> + 'static,
    {
        self.on_publish.push(Box::new(subscriber));
    }

    pub fn subscriber_count(&self) -> usize {
        self.on_publish.len()
    }

    pub fn publish(&self, out: &mut dyn Write, num: i64) -> Result<()> {
        writeln!(out, "ANNOUNCEMENT: We are publishing {}...", num)?;
        for subscriber in &self.on_publish {
            subscriber(&mut *out, num)?;
        }
        Ok(())
    }
}

/// 以字串為 key 的通知中心；同一個 key 只保留最後一次註冊的 observer
///
/// `trigger` 依 key 的字典順序呼叫。
#[derive(Default)]
pub struct NotificationCenter {
    observers: BTreeMap<String, Subscriber>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observer<F>(&mut self, key: impl Into<String>, observer: F)
    where
        F: Fn(&mut dyn Write, i64) -> std::io::Result<()> + 'static,
    {
        self.observers.insert(key.into(), Box::new(observer));
    }

    pub fn remove_observer(&mut self, key: &str) -> bool {
        self.observers.remove(key).is_some()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.observers.keys().map(String::as_str).collect()
    }

    pub fn trigger(&self, out: &mut dyn Write, value: i64) -> Result<()> {
        for observer in self.observers.values() {
            observer(&mut *out, value)?;
        }
        Ok(())
    }
}

pub fn publisher_demo(out: &mut dyn Write) -> Result<()> {
    let mut publisher = Publisher::new();
    publisher.subscribe(|out, value| writeln!(out, "Wow! {} got published! So excited!", value));
    publisher.subscribe(|out, value| {
        writeln!(
            out,
            "Amazing, I always knew {} will get published at some point!",
            value
        )
    });

    publisher.publish(out, 123)?;
    publisher.publish(out, 456)?;
    Ok(())
}

pub fn notification_center_demo(out: &mut dyn Write) -> Result<()> {
    let mut center = NotificationCenter::new();
    center.add_observer("cool", |out, num| writeln!(out, "{}", num));
    center.add_observer("bar", |out, num| writeln!(out, "hmmm  {}", num));
    center.trigger(out, 20)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(out: Vec<u8>) -> Vec<String> {
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_publisher_notifies_in_registration_order() {
        let mut publisher = Publisher::new();
        publisher.subscribe(|out, v| writeln!(out, "first {}", v));
        publisher.subscribe(|out, v| writeln!(out, "second {}", v));

        let mut out = Vec::new();
        publisher.publish(&mut out, 7).unwrap();

        assert_eq!(
            lines(out),
            vec!["ANNOUNCEMENT: We are publishing 7...", "first 7", "second 7"]
        );
    }

    #[test]
    fn test_publish_without_subscribers_only_announces() {
        let publisher = Publisher::new();
        let mut out = Vec::new();
        publisher.publish(&mut out, 1).unwrap();

        assert_eq!(lines(out), vec!["ANNOUNCEMENT: We are publishing 1..."]);
    }

    #[test]
    fn test_add_observer_replaces_existing_key() {
        let mut center = NotificationCenter::new();
        center.add_observer("cool", |out, n| writeln!(out, "old {}", n));
        center.add_observer("cool", |out, n| writeln!(out, "new {}", n));

        let mut out = Vec::new();
        center.trigger(&mut out, 3).unwrap();

        assert_eq!(lines(out), vec!["new 3"]);
    }

    #[test]
    fn test_remove_observer() {
        let mut center = NotificationCenter::new();
        center.add_observer("cool", |out, n| writeln!(out, "{}", n));
        center.add_observer("bar", |out, n| writeln!(out, "hmmm  {}", n));

        assert!(center.remove_observer("cool"));
        assert!(!center.remove_observer("cool"));
        assert_eq!(center.keys(), vec!["bar"]);

        let mut out = Vec::new();
        center.trigger(&mut out, 20).unwrap();
        assert_eq!(lines(out), vec!["hmmm  20"]);
    }

    #[test]
    fn test_notification_center_demo_output() {
        let mut out = Vec::new();
        notification_center_demo(&mut out).unwrap();

        assert_eq!(lines(out), vec!["hmmm  20", "20"]);
    }
}
