use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use quote::{ToTokens, quote};
use syn::spanned::Spanned;
use syn::{Item, parse_macro_input};

/// #[entity_id] 宏实现
/// 仅支持单字段整型 tuple struct，并为包装类型：
/// - 合并/追加派生：Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord
/// - 提供 new(value) 校验、value()、Display、FromStr、TryFrom<i64>、From<Self> for inner
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[entity_id] takes no arguments",
        )
        .to_compile_error()
        .into();
    }
    let input = parse_macro_input!(item as Item);

    let st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[entity_id] only on struct")
                .to_compile_error()
                .into();
        }
    };

    let inner_ty = match &st.fields {
        syn::Fields::Unnamed(f) if f.unnamed.len() == 1 => f.unnamed.first().map(|f| f.ty.clone()),
        _ => None,
    };
    let inner_ty = match inner_ty {
        Some(ty) => ty,
        None => {
            return syn::Error::new(
                st.span(),
                "#[entity_id] supports only single-field tuple struct, e.g., struct ProductId(u32);",
            )
            .to_compile_error()
            .into();
        }
    };

    let mut st_out = st.clone();
    let required: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(Copy),
        syn::parse_quote!(Debug),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
        syn::parse_quote!(Hash),
        syn::parse_quote!(PartialOrd),
        syn::parse_quote!(Ord),
    ];
    apply_derives(&mut st_out.attrs, required);

    // 反序列化走 TryFrom<i64>，序列化为内部整型
    let into_lit = syn::LitStr::new(&inner_ty.to_token_stream().to_string(), inner_ty.span());
    st_out
        .attrs
        .push(syn::parse_quote!(#[serde(try_from = "i64", into = #into_lit)]));

    let ident = &st_out.ident;
    let name = ident.to_string();

    let out = quote! {
        #st_out

        impl #ident {
            /// 创建标识，非正数返回 `DomainError::InvalidValue`
            pub fn new(value: #inner_ty) -> ::std::result::Result<Self, ::catalog_domain::error::DomainError> {
                let zero: #inner_ty = ::core::default::Default::default();
                if value <= zero {
                    return ::std::result::Result::Err(::catalog_domain::error::DomainError::InvalidValue {
                        reason: ::std::format!("{} must be a positive integer, got {}", #name, value),
                    });
                }
                ::std::result::Result::Ok(Self(value))
            }

            pub const fn value(&self) -> #inner_ty {
                self.0
            }
        }

        impl ::core::convert::TryFrom<i64> for #ident {
            type Error = ::catalog_domain::error::DomainError;

            fn try_from(value: i64) -> ::std::result::Result<Self, Self::Error> {
                let inner = <#inner_ty as ::core::convert::TryFrom<i64>>::try_from(value).map_err(|_| {
                    ::catalog_domain::error::DomainError::InvalidValue {
                        reason: ::std::format!("{} out of range: {}", #name, value),
                    }
                })?;
                Self::new(inner)
            }
        }

        impl ::std::str::FromStr for #ident {
            type Err = ::catalog_domain::error::DomainError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let raw: i64 = s.trim().parse()?;
                <Self as ::core::convert::TryFrom<i64>>::try_from(raw)
            }
        }

        impl ::std::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl ::core::convert::From<#ident> for #inner_ty {
            fn from(value: #ident) -> Self {
                value.0
            }
        }
    };

    TokenStream::from(out)
}
