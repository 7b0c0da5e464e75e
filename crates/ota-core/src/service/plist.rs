//! PLIST service: returns the installer manifest for one app.

use super::{ServiceContext, ServiceError, ServiceRequest, ServiceResponse, CONTENT_TYPE_PLIST};
use crate::app::AppInfo;
use crate::artifact::Classifiers;
use crate::error::OtaError;
use crate::generate::generate_plist;
use crate::names::{
    BUNDLE_IDENTIFIER, BUNDLE_VERSION, IPA_CLASSIFIER, OTA_CLASSIFIER, REFERER, TITLE,
};
use crate::params::{parse_parameter_path, ParameterList};

/// Fields read from the query string when it has any parameter, otherwise
/// from the encoded segments after the service marker in the request path.
/// A `Referer` segment overrides the request's referer.
pub fn handle_plist(
    ctx: &ServiceContext,
    req: &ServiceRequest,
) -> Result<ServiceResponse, ServiceError> {
    let (referer, app, classifiers) = if !req.query.is_empty() {
        (
            req.referer().map(str::to_string),
            AppInfo::from_parts(
                req.param(TITLE),
                req.param(BUNDLE_IDENTIFIER),
                req.param(BUNDLE_VERSION),
            ),
            Classifiers::new(req.param(IPA_CLASSIFIER), req.param(OTA_CLASSIFIER)),
        )
    } else {
        let params = parse_parameter_path(req.uri.as_deref(), &ctx.config.service_name)
            .map_err(OtaError::from)?
            .unwrap_or_default();
        from_path(req, &params)
    };

    let referer = referer.ok_or(ServiceError::RefererRequired)?;

    tracing::info!(
        remote = req.remote(),
        referer = %referer,
        title = ?app.title(),
        bundle_identifier = ?app.bundle_identifier(),
        bundle_version = ?app.bundle_version(),
        "PLIST request"
    );

    let body = generate_plist(&ctx.templates, &referer, &app, &classifiers)?;
    Ok(ServiceResponse {
        content_type: CONTENT_TYPE_PLIST,
        body,
    })
}

fn from_path(req: &ServiceRequest, params: &ParameterList) -> (Option<String>, AppInfo, Classifiers) {
    let referer = params.get(REFERER).or_else(|| req.referer());
    (
        referer.map(str::to_string),
        AppInfo::from_parts(
            params.get(TITLE),
            params.get(BUNDLE_IDENTIFIER),
            params.get(BUNDLE_VERSION),
        ),
        Classifiers::new(params.get(IPA_CLASSIFIER), params.get(OTA_CLASSIFIER)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{encode, url_encode};

    const REFERER_URL: &str = "http://hostname:8080/path/MyApp.htm";
    const IPA_LINK: &str = "http://hostname:8080/path/MyApp.ipa";

    fn string_tag(v: &str) -> String {
        format!("<string>{v}</string>")
    }

    fn assert_manifest(body: &str) {
        assert!(body.contains(&string_tag("MyApp")));
        assert!(body.contains(&string_tag("1.0.2")));
        assert!(body.contains(&string_tag("com.example.xyz.MyApp")));
        assert!(body.contains(&string_tag(IPA_LINK)));
    }

    #[test]
    fn query_parameters() {
        let url = format!(
            "http://ota.example.com/ota/PLIST?Referer={}&title=MyApp&bundleIdentifier=com.example.xyz.MyApp&bundleVersion=1.0.2",
            url_encode(REFERER_URL)
        );
        let req = ServiceRequest::from_url(&url).unwrap();
        let resp = handle_plist(&ServiceContext::default(), &req).unwrap();
        assert_eq!(resp.content_type, CONTENT_TYPE_PLIST);
        assert_manifest(&resp.body);
    }

    #[test]
    fn slash_separated_parameters() {
        let uri = format!(
            "/abc/PLIST/{}/{}/{}/{}",
            encode(&format!("Referer={REFERER_URL}")),
            encode("title=MyApp"),
            encode("bundleIdentifier=com.example.xyz.MyApp"),
            encode("bundleVersion=1.0.2"),
        );
        let req = ServiceRequest {
            uri: Some(uri),
            ..Default::default()
        };
        let resp = handle_plist(&ServiceContext::default(), &req).unwrap();
        assert_manifest(&resp.body);
    }

    #[test]
    fn path_referer_overrides_header() {
        let uri = format!(
            "/abc/PLIST/{}/{}",
            encode(&format!("Referer={REFERER_URL}")),
            encode("ipaClassifier=ipaClassifier"),
        );
        let req = ServiceRequest {
            uri: Some(uri),
            ..Default::default()
        }
        .with_header("Referer", "http://other/Other.htm");
        let resp = handle_plist(&ServiceContext::default(), &req).unwrap();
        assert!(resp
            .body
            .contains(&string_tag("http://hostname:8080/path/MyApp-ipaClassifier.ipa")));
    }

    #[test]
    fn header_referer_used_without_path_referer() {
        let req = ServiceRequest {
            uri: Some(format!("/abc/PLIST/{}", encode("title=MyApp"))),
            ..Default::default()
        }
        .with_header("Referer", REFERER_URL);
        let resp = handle_plist(&ServiceContext::default(), &req).unwrap();
        assert!(resp.body.contains(&string_tag(IPA_LINK)));
    }

    #[test]
    fn missing_referer_is_bad_request() {
        let req = ServiceRequest {
            uri: Some(format!("/abc/PLIST/{}", encode("title=MyApp"))),
            ..Default::default()
        };
        let err = handle_plist(&ServiceContext::default(), &req).unwrap_err();
        assert!(matches!(err, ServiceError::RefererRequired));
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn invalid_token_is_bad_request() {
        let req = ServiceRequest {
            uri: Some("/abc/PLIST/%%%".to_string()),
            ..Default::default()
        }
        .with_header("Referer", REFERER_URL);
        let err = handle_plist(&ServiceContext::default(), &req).unwrap_err();
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn custom_service_name() {
        let mut ctx = ServiceContext::default();
        ctx.config.service_name = "MANIFEST".to_string();
        let req = ServiceRequest {
            uri: Some(format!(
                "/abc/MANIFEST/{}",
                encode(&format!("Referer={REFERER_URL}"))
            )),
            ..Default::default()
        };
        let resp = handle_plist(&ctx, &req).unwrap();
        assert!(resp.body.contains(&string_tag(IPA_LINK)));
    }
}
