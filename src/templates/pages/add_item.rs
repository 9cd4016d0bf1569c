use crate::domain::submission::{normalize_tags, SubmissionForm, ESTIMATED_POINTS, SIZES};
use crate::domain::{Category, Condition};
use crate::templates::components::badge;
use crate::templates::{desktop_layout, Chrome};
use crate::uploads::ImagePreview;
use maud::{html, Markup};

pub struct AddItemVm<'a> {
    pub form: &'a SubmissionForm,
    pub max_images: usize,
}

pub fn add_item_page(chrome: Chrome<'_>, vm: &AddItemVm<'_>) -> Markup {
    let form = vm.form;
    let tags = normalize_tags(&form.tags);

    desktop_layout(
        "List a New Item",
        chrome,
        html! {
            main class="container narrow" {
                div class="page-head" {
                    h1 { "List a New Item" }
                    p { "Share your pre-loved clothing with the ReWear community" }
                }

                div class="card" {
                    h2 { "Item Details" }
                    form method="post" action="/add-item" enctype="multipart/form-data" class="stack" {
                        label for="image-upload" { "Photos *" }
                        div class="dropzone" {
                            input
                                type="file"
                                id="image-upload"
                                name="images"
                                accept="image/*"
                                multiple
                                hx-post="/add-item/preview"
                                hx-encoding="multipart/form-data"
                                hx-trigger="change"
                                hx-target="#image-previews"
                                hx-swap="innerHTML";
                            p { "Click to upload images" }
                            p class="muted small" { "Up to " (vm.max_images) " photos, JPG or PNG" }
                        }
                        div id="image-previews" {}

                        div class="grid cols-2" {
                            div {
                                label for="title" { "Title *" }
                                input id="title" name="title" placeholder="e.g., Vintage Denim Jacket" value=(form.title) required;
                            }
                            div {
                                label for="category" { "Category *" }
                                (choice("category", "Select category", &form.category, Category::ALL.iter().map(|c| c.label())))
                            }
                        }

                        label for="description" { "Description *" }
                        textarea id="description" name="description" rows="4" placeholder="Describe the item, its condition, brand, etc." required {
                            (form.description)
                        }

                        div class="grid cols-3" {
                            div {
                                label for="size" { "Size" }
                                (choice("size", "Select size", &form.size, SIZES.iter().copied()))
                            }
                            div {
                                label for="condition" { "Condition *" }
                                (choice("condition", "Select condition", &form.condition, Condition::ALL.iter().map(|c| c.label())))
                            }
                            div {
                                label for="brand" { "Type/Brand" }
                                input id="brand" name="brand" placeholder="e.g., H&M, Vintage, etc." value=(form.brand);
                            }
                        }

                        label for="tags" { "Tags" }
                        input id="tags" name="tags" placeholder="Comma separated, e.g. vintage, denim" value=(form.tags);
                        @if !tags.is_empty() {
                            div class="tags" {
                                @for tag in &tags {
                                    (badge("secondary", tag))
                                }
                            }
                        }

                        div class="notice green" {
                            h3 { "Estimated Points Value" }
                            p class="small" { "Based on category and condition, this item could be worth approximately:" }
                            p class="points big" { (ESTIMATED_POINTS.0) "-" (ESTIMATED_POINTS.1) " points" }
                        }

                        div class="row" {
                            button type="submit" class="btn primary wide" { "List Item for Review" }
                            a href="/dashboard" class="btn outline" { "Cancel" }
                        }
                    }
                }
            }
        },
    )
}

fn choice<'a>(
    name: &str,
    placeholder: &str,
    current: &str,
    options: impl Iterator<Item = &'a str>,
) -> Markup {
    html! {
        select id=(name) name=(name) {
            option value="" disabled selected[current.is_empty()] { (placeholder) }
            @for opt in options {
                option value=(opt) selected[current == opt] { (opt) }
            }
        }
    }
}

/// Thumbnails for `#image-previews`, in selection order.
pub fn image_previews(previews: &[ImagePreview], max_images: usize) -> Markup {
    html! {
        @if previews.len() > max_images {
            p class="field-error" { "You can upload up to " (max_images) " photos" }
        }
        div class="grid cols-3 previews" {
            @for preview in previews {
                figure class="preview" data-index=(preview.index) {
                    img src=(preview.data_url) alt=(format!("Upload {}", preview.index + 1));
                    figcaption class="small" { (preview.filename) }
                }
            }
        }
    }
}
