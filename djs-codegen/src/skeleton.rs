//! Files of a freshly started app.

use djscaffold_core::{File, to_pascal_case};

use crate::{builder::CodeBuilder, project::App};

/// The package layout `djs start-app` writes.
///
/// Every file is written only when missing, so starting an app over an
/// existing directory fills the gaps and leaves user code alone.
pub struct AppSkeleton<'a> {
    app: &'a App,
}

impl<'a> AppSkeleton<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    /// `AppConfig` subclass name, e.g. `ShopConfig`
    pub fn config_class(&self) -> String {
        format!("{}Config", to_pascal_case(self.app.label()))
    }

    pub fn files(&self) -> Vec<File> {
        vec![
            self.file("__init__.py", String::new()),
            self.file("apps.py", self.apps_py()),
            self.file(
                "models.py",
                placeholder("from django.db import models", "# Create your models here."),
            ),
            self.file(
                "views.py",
                placeholder("from django.shortcuts import render", "# Create your views here."),
            ),
            self.file(
                "admin.py",
                placeholder("from django.contrib import admin", "# Register your models here."),
            ),
            self.file(
                "tests.py",
                placeholder("from django.test import TestCase", "# Create your tests here."),
            ),
            self.file("migrations/__init__.py", String::new()),
        ]
    }

    fn file(&self, name: &str, content: String) -> File {
        File::new(self.app.file(name), content)
    }

    fn apps_py(&self) -> String {
        CodeBuilder::python()
            .line("from django.apps import AppConfig")
            .blank()
            .blank()
            .class(&self.config_class(), "AppConfig")
            .line("default_auto_field = 'django.db.models.BigAutoField'")
            .line(&format!("name = '{}'", self.app.name()))
            .build()
    }
}

fn placeholder(import: &str, comment: &str) -> String {
    CodeBuilder::python()
        .line(import)
        .blank()
        .line(comment)
        .build()
}
